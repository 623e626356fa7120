use crate::error::{LogoForgeError, Result};
use std::fs;
use std::path::PathBuf;
use tempfile::Builder;

/// Fixed name and content type the finished logo is offered under.
pub const DOWNLOAD_FILE_NAME: &str = "generated_logo.png";
pub const DOWNLOAD_MIME_TYPE: &str = "image/png";

/// A downloaded logo image: its source URL, the bytes, and the temporary
/// file they were persisted to. Lives for the rest of the session; replaced
/// wholesale by the next successful generation.
#[derive(Debug)]
pub struct Artifact {
    pub url: String,
    pub bytes: Vec<u8>,
    pub path: PathBuf,
}

impl Artifact {
    /// Writes `bytes` to a fresh temporary `.png` file and keeps it on disk.
    pub fn persist(url: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let file = Builder::new()
            .prefix("logoforge_")
            .suffix(".png")
            .tempfile()
            .map_err(|e| LogoForgeError::IoError(e.to_string()))?;

        let path = file
            .into_temp_path()
            .keep()
            .map_err(|e| LogoForgeError::IoError(e.to_string()))?;

        fs::write(&path, &bytes).map_err(|e| LogoForgeError::IoError(e.to_string()))?;

        log::debug!("Persisted logo artifact to {}", path.display());

        Ok(Self {
            url: url.into(),
            bytes,
            path,
        })
    }

    pub fn download_file_name(&self) -> &'static str {
        DOWNLOAD_FILE_NAME
    }

    pub fn mime_type(&self) -> &'static str {
        DOWNLOAD_MIME_TYPE
    }
}
