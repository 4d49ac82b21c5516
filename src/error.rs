use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the workflow, showcase, or config assets.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Could not read asset '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse asset '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse {kind} JSON: {source}")]
    InlineJson {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while rendering the page or writing the site.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template '{name}' failed to render: {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Download file name '{name}' is not allowed: {reason}")]
    InvalidDownloadName { name: String, reason: &'static str },

    #[error("Could not write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
