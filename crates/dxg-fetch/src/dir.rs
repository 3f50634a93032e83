//! Local directory content source.

use std::path::{Path, PathBuf};

use crate::{ContentSource, error::FetchError};

/// Reads documents relative to a local site root.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let full = self.root.join(path);
        let path = full.display().to_string();
        tracing::debug!(%path, "reading content");
        tokio::fs::read(&full)
            .await
            .map_err(|source| FetchError::Io { path, source })
    }

    fn describe(&self, path: &str) -> String {
        self.root.join(path).display().to_string()
    }
}
