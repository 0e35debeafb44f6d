//! Append-only JSON-lines interaction log.

use async_trait::async_trait;
use isla_core::chat::{InteractionRecord, InteractionRepository};
use isla_core::error::{IslaError, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Writes one JSON object per line.
///
/// Appends are serialized through a mutex so concurrent exchanges never
/// interleave partial lines.
pub struct JsonlInteractionRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlInteractionRepository {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl InteractionRepository for JsonlInteractionRepository {
    async fn append(&self, record: &InteractionRecord) -> Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                IslaError::data_access(format!(
                    "Failed to open interaction log at {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
