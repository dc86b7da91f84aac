//! Changelog sources

use std::path::PathBuf;

use async_trait::async_trait;
use liftoff_core::{ChangelogError, Result};
use tracing::{debug, instrument};

/// Trait for anything that can supply raw changelog text
#[async_trait]
pub trait ChangelogSource: Send + Sync {
    /// Human-readable location, used in logs
    fn location(&self) -> String;

    /// Load the full changelog text
    async fn load(&self) -> Result<String>;
}

/// Changelog read from a file on disk
#[derive(Debug, Clone)]
pub struct FileChangelog {
    path: PathBuf,
}

impl FileChangelog {
    /// Create a source for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ChangelogSource for FileChangelog {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<String> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ChangelogError::FileNotFound(self.path.clone()),
                _ => ChangelogError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                },
            })?;

        debug!(bytes = text.len(), "changelog loaded");
        Ok(text)
    }
}
