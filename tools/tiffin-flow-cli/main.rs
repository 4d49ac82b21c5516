mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use tiffin_flow::prelude::*;

/// Builds the static showcase page for an n8n workflow export
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Also write log lines to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render index.html and copy the workflow export into an output directory
    Build {
        #[command(flatten)]
        inputs: Inputs,

        /// Directory the site is written to
        #[arg(short, long, default_value = "site")]
        out: PathBuf,
    },
    /// Print the workflow summary to stdout
    Summary {
        #[command(flatten)]
        inputs: Inputs,
    },
}

#[derive(Args, Debug)]
struct Inputs {
    /// Path to the n8n workflow export (defaults to the bundled tiffin workflow)
    #[arg(short, long)]
    workflow: Option<PathBuf>,

    /// Path to the showcase content JSON (defaults to the bundled copy)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Path to a site config JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

struct LoadedInputs {
    asset: WorkflowAsset,
    showcase: Showcase,
    config: SiteConfig,
}

fn main() {
    let cli = Cli::parse();

    let level = logging::level_from_occurrences(cli.verbose);
    if let Err(e) = logging::init_logger(level, cli.log_file.as_deref()) {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(1);
    }

    match cli.command {
        Command::Build { inputs, out } => run_build(inputs, out),
        Command::Summary { inputs } => run_summary(inputs),
    }
}

fn run_build(inputs: Inputs, out: PathBuf) {
    let start = Instant::now();
    let loaded = load_inputs(&inputs);

    let summary = loaded
        .config
        .summarizer()
        .summarize(loaded.asset.workflow(), &loaded.showcase);
    log::info!(
        "Summarized {} nodes and {} connections",
        summary.node_count,
        summary.connection_count
    );

    let html = loaded
        .config
        .renderer()
        .render(&summary)
        .unwrap_or_else(|e| exit_with_error(&format!("Page rendering failed: {}", e)));

    let written = SiteWriter::new(out, &loaded.config.download_file_name)
        .write(&loaded.asset, &html)
        .unwrap_or_else(|e| exit_with_error(&format!("Writing the site failed: {}", e)));

    log::info!(
        "Site built in {:?}: {}",
        start.elapsed(),
        written.index.display()
    );
}

fn run_summary(inputs: Inputs) {
    let loaded = load_inputs(&inputs);
    let summary = loaded
        .config
        .summarizer()
        .summarize(loaded.asset.workflow(), &loaded.showcase);
    print!("{}", TextReport::format(&summary));
}

fn load_inputs(inputs: &Inputs) -> LoadedInputs {
    let asset = match &inputs.workflow {
        Some(path) => {
            log::info!("Loading workflow from '{}'", path.display());
            WorkflowAsset::from_file(path)
        }
        None => {
            log::info!("No workflow path provided. Using the bundled tiffin workflow.");
            WorkflowAsset::bundled()
        }
    }
    .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let showcase = match &inputs.content {
        Some(path) => Showcase::from_file(path),
        None => Showcase::bundled(),
    }
    .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let config = match &inputs.config {
        Some(path) => SiteConfig::from_file(path),
        None => Ok(SiteConfig::default()),
    }
    .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    LoadedInputs {
        asset,
        showcase,
        config,
    }
}

fn exit_with_error(message: &str) -> ! {
    log::error!("Error: {}", message);
    process::exit(1);
}
