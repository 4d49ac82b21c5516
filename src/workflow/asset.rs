use super::definition::Workflow;
use crate::error::AssetError;
use std::fs;
use std::path::Path;

const BUNDLED_WORKFLOW: &str = include_str!("../../assets/workflow.json");

/// A workflow export together with the exact bytes it was parsed from.
///
/// The page offers the export for download, and the downloadable copy must be the
/// authored document byte-for-byte, so the raw bytes travel alongside the model.
#[derive(Debug, Clone)]
pub struct WorkflowAsset {
    raw: Vec<u8>,
    workflow: Workflow,
}

impl WorkflowAsset {
    /// Parses a workflow export from raw bytes, keeping the bytes.
    pub fn from_bytes(raw: Vec<u8>) -> Result<Self, AssetError> {
        let workflow = serde_json::from_slice(&raw).map_err(|source| AssetError::InlineJson {
            kind: "workflow",
            source,
        })?;
        Ok(Self { raw, workflow })
    }

    /// Loads a workflow export from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let workflow = serde_json::from_slice(&raw).map_err(|source| AssetError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded workflow asset from '{}'", path.display());
        Ok(Self { raw, workflow })
    }

    /// The tiffin order workflow shipped with the crate.
    pub fn bundled() -> Result<Self, AssetError> {
        Self::from_bytes(BUNDLED_WORKFLOW.as_bytes().to_vec())
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}
