use crate::error::AssetError;
use crate::render::PageRenderer;
use crate::summary::{
    DEFAULT_NAMESPACE_PREFIX, DEFAULT_PARAMETER_PREVIEW_LIMIT, DEFAULT_TIMEZONE, LabelFormatter,
    Summarizer,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default file name of the downloadable workflow copy.
pub const DEFAULT_DOWNLOAD_FILE_NAME: &str = "workflow.json";

/// Site build settings, read from an optional JSON file.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub page_title: String,
    pub namespace_prefixes: Vec<String>,
    pub default_timezone: String,
    pub parameter_preview_limit: usize,
    pub download_file_name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_title: "Y Tiffin Service · n8n Order Workflow".to_string(),
            namespace_prefixes: vec![DEFAULT_NAMESPACE_PREFIX.to_string()],
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            parameter_preview_limit: DEFAULT_PARAMETER_PREVIEW_LIMIT,
            download_file_name: DEFAULT_DOWNLOAD_FILE_NAME.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        serde_json::from_str(json).map_err(|source| AssetError::InlineJson {
            kind: "config",
            source,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| AssetError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded site config from '{}'", path.display());
        Ok(config)
    }

    /// A summarizer honouring the prefix, timezone, and preview settings.
    pub fn summarizer(&self) -> Summarizer {
        Summarizer::builder()
            .with_labels(LabelFormatter::with_prefixes(
                self.namespace_prefixes.iter().cloned(),
            ))
            .with_default_timezone(&self.default_timezone)
            .with_parameter_preview_limit(self.parameter_preview_limit)
            .build()
    }

    /// A page renderer linking to the configured download file.
    pub fn renderer(&self) -> PageRenderer {
        PageRenderer::new(&self.page_title, &self.download_file_name)
    }
}
