//! Filesystem-based session store implementation.
//!
//! Each slot is one JSON document under the base directory
//! (`{base_path}/{slot}.json`), written atomically via temp file + rename.

use crate::{SessionStore, Slot};
use std::path::PathBuf;
use vitrine_error::{StorageError, StorageErrorKind, VitrineResult};

/// Filesystem store backend.
///
/// Mirrors the dashboard's browser-storage slots as plain JSON files, so a
/// restarted session resumes where it left off.
pub struct FileSystemStore {
    base_path: PathBuf,
}

impl FileSystemStore {
    /// Create a new filesystem store.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> VitrineResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem session store");
        Ok(Self { base_path })
    }

    /// Get the document path for a slot.
    fn slot_path(&self, slot: Slot) -> PathBuf {
        self.base_path.join(format!("{}.json", slot.as_str()))
    }
}

#[async_trait::async_trait]
impl SessionStore for FileSystemStore {
    #[tracing::instrument(skip(self), fields(slot = %slot))]
    async fn read(&self, slot: Slot) -> VitrineResult<Option<String>> {
        let path = self.slot_path(slot);

        match tokio::fs::read_to_string(&path).await {
            Ok(document) => {
                tracing::debug!(
                    path = %path.display(),
                    size = document.len(),
                    "Read slot document"
                );
                Ok(Some(document))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::SlotRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, document), fields(slot = %slot, size = document.len()))]
    async fn write(&self, slot: Slot, document: &str) -> VitrineResult<()> {
        let path = self.slot_path(slot);

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, document).await.map_err(|e| {
            StorageError::new(StorageErrorKind::SlotWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::SlotWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::debug!(
            path = %path.display(),
            size = document.len(),
            "Wrote slot document"
        );

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(slot = %slot))]
    async fn clear(&self, slot: Slot) -> VitrineResult<()> {
        let path = self.slot_path(slot);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Cleared slot document");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::SlotWrite(format!(
                "delete {}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }
}
