//! Prelude module for convenient imports
//!
//! Re-exports the types needed to load, summarize, and render a workflow showcase.
//!
//! # Example
//!
//! ```rust,no_run
//! use tiffin_flow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let asset = WorkflowAsset::bundled()?;
//! let showcase = Showcase::bundled()?;
//!
//! let summary = Summarizer::default().summarize(asset.workflow(), &showcase);
//! println!("{}", TextReport::format(&summary));
//! # Ok(())
//! # }
//! ```

// Assets
pub use crate::config::SiteConfig;
pub use crate::showcase::{Highlight, Showcase, Stage};
pub use crate::workflow::{Workflow, WorkflowAsset, WorkflowNode};

// Summarizing
pub use crate::summary::{
    LabelFormatter, NodeCard, NodeIndex, StageEntry, StageView, Summarizer, WorkflowSummary,
    build_stage_view, count_connections, count_nodes, format_type_label,
};

// Rendering
pub use crate::render::{PageRenderer, SiteWriter, TextReport};

// Error types
pub use crate::error::{AssetError, RenderError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
