use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{ScratchError, ScratchFile, ScratchStore};
use crate::domain::ScratchPath;

/// Scratch directory on local disk. Every staged upload gets a UUID-prefixed
/// name so concurrent requests with the same file name never collide.
pub struct LocalScratchStore {
    base_path: PathBuf,
}

impl LocalScratchStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ScratchError> {
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &std::path::Path {
        &self.base_path
    }
}

#[async_trait]
impl ScratchStore for LocalScratchStore {
    async fn stage(&self, filename: &str, data: &[u8]) -> Result<ScratchFile, ScratchError> {
        let scratch_path = ScratchPath::new(filename);
        let path = self.base_path.join(scratch_path.as_str());

        // Take ownership of the path before writing so a failed write is
        // cleaned up by the guard as well.
        let guard = ScratchFile::new(path);

        tokio::fs::write(guard.path(), data)
            .await
            .map_err(|e| ScratchError::WriteFailed(format!("{}: {e}", scratch_path)))?;

        tracing::debug!(path = %guard.path().display(), bytes = data.len(), "Upload staged");

        Ok(guard)
    }

    async fn check_writable(&self) -> Result<(), ScratchError> {
        let base_path = self.base_path.clone();

        tokio::task::spawn_blocking(move || {
            tempfile::Builder::new()
                .prefix(".health-")
                .tempfile_in(&base_path)
                .map(drop)
                .map_err(|e| ScratchError::WriteFailed(format!("{}: {e}", base_path.display())))
        })
        .await
        .map_err(|e| ScratchError::WriteFailed(format!("task join error: {e}")))?
    }
}
