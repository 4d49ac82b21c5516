use crate::error::AssetError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUNDLED_SHOWCASE: &str = include_str!("../../assets/showcase.json");

/// A curated group of workflow nodes representing one phase of the order lifecycle.
///
/// Stages are authored independently of the workflow, so `node_names` may mention
/// nodes the workflow does not contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub node_names: Vec<String>,
}

/// A marketing card shown under the hero section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub body: String,
}

/// All authored page copy that sits next to the workflow export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showcase {
    #[serde(default)]
    pub eyebrow: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub import_steps: Vec<String>,
}

impl Showcase {
    /// Parses showcase content from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        serde_json::from_str(json).map_err(|source| AssetError::InlineJson {
            kind: "showcase",
            source,
        })
    }

    /// Loads showcase content from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| AssetError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The tiffin service copy shipped with the crate.
    pub fn bundled() -> Result<Self, AssetError> {
        Self::from_json(BUNDLED_SHOWCASE)
    }
}
