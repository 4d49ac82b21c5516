//! # tiffin-flow - Static Showcase for the Y Tiffin Service n8n Workflow
//!
//! **tiffin-flow** turns an n8n workflow export into a single static page: headline
//! statistics, stage-by-stage explanations, a catalog of every node, and a download
//! link serving the export byte-for-byte.
//!
//! ## Core Workflow
//!
//! 1.  **Load the assets**: a [`workflow::WorkflowAsset`] (the n8n export, raw bytes kept)
//!     and a [`showcase::Showcase`] (highlights, stages, and import steps).
//! 2.  **Summarize**: a [`summary::Summarizer`] counts nodes and connections, formats
//!     node type labels, and resolves stages against the workflow's nodes.
//! 3.  **Render**: a [`render::PageRenderer`] produces the HTML page.
//! 4.  **Write**: a [`render::SiteWriter`] stores `index.html` next to the downloadable
//!     workflow copy.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tiffin_flow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let asset = WorkflowAsset::from_file("assets/workflow.json")?;
//!     let showcase = Showcase::from_file("assets/showcase.json")?;
//!     let config = SiteConfig::default();
//!
//!     let summary = config.summarizer().summarize(asset.workflow(), &showcase);
//!     println!("{} nodes, {} connections", summary.node_count, summary.connection_count);
//!
//!     let html = config.renderer().render(&summary)?;
//!     SiteWriter::new("site", &config.download_file_name).write(&asset, &html)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod render;
pub mod showcase;
pub mod summary;
pub mod workflow;
