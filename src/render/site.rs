use crate::error::RenderError;
use crate::workflow::WorkflowAsset;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the rendered page.
pub const INDEX_FILE_NAME: &str = "index.html";

/// Writes the rendered page and the downloadable workflow into an output directory.
pub struct SiteWriter {
    out_dir: PathBuf,
    download_file_name: String,
}

/// Paths produced by a [`SiteWriter::write`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSite {
    pub index: PathBuf,
    pub download: PathBuf,
}

impl SiteWriter {
    pub fn new(out_dir: impl Into<PathBuf>, download_file_name: &str) -> Self {
        Self {
            out_dir: out_dir.into(),
            download_file_name: download_file_name.to_string(),
        }
    }

    /// Writes `index.html` and a byte-for-byte copy of the workflow export.
    ///
    /// The download name must be a plain file name other than `index.html`, so the
    /// copy can neither replace the page nor land outside the output directory.
    pub fn write(&self, asset: &WorkflowAsset, html: &str) -> Result<WrittenSite, RenderError> {
        validate_download_name(&self.download_file_name)?;

        fs::create_dir_all(&self.out_dir).map_err(|source| RenderError::Write {
            path: self.out_dir.clone(),
            source,
        })?;

        let index = self.out_dir.join(INDEX_FILE_NAME);
        write_file(&index, html.as_bytes())?;

        let download = self.out_dir.join(&self.download_file_name);
        write_file(&download, asset.raw())?;

        log::info!(
            "Wrote '{}' and '{}'",
            index.display(),
            download.display()
        );
        Ok(WrittenSite { index, download })
    }
}

fn validate_download_name(name: &str) -> Result<(), RenderError> {
    let reason = if name.is_empty() || name == "." || name == ".." {
        "it is not a file name"
    } else if name.contains(['/', '\\']) {
        "it contains a path separator"
    } else if name == INDEX_FILE_NAME {
        "it would overwrite the rendered page"
    } else {
        return Ok(());
    };
    Err(RenderError::InvalidDownloadName {
        name: name.to_string(),
        reason,
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), RenderError> {
    fs::write(path, contents).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })
}
