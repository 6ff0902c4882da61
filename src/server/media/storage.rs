//! Media storage backends.
//!
//! The rest of the application only sees the [`MediaStorage`] contract: write a blob under
//! a key, remove a key. [`LocalStorage`] keeps blobs as files below the media root, which
//! is also what `/media` serves.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::server::error::storage::StorageError;

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Writes `bytes` under `key`, replacing any blob already stored there.
    async fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Removes the blob stored under `key`. Removing a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Stores blobs as files relative to a root directory.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a key onto a path below the root.
    ///
    /// Only plain relative segments are accepted, so no key can leave the root.
    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);

        let is_contained = !key.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));

        if !is_contained {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl MediaStorage for LocalStorage {
    async fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.resolve(key)?;
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        tokio::fs::write(&path, bytes).await.map_err(io_err)?;

        tracing::debug!("Stored media file {}", key);

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.resolve(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!("Removed media file {}", key);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

/// In-memory backend recording every write and removal.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    files: tokio::sync::Mutex<std::collections::HashMap<String, Vec<u8>>>,
    deleted: tokio::sync::Mutex<Vec<String>>,
    fail_deletes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose deletions always fail with an I/O error.
    pub fn failing_deletes() -> Self {
        Self {
            fail_deletes: true,
            ..Self::default()
        }
    }

    /// Places a blob without recording it as a save.
    pub async fn seed(&self, key: &str) {
        self.files
            .lock()
            .await
            .insert(key.to_string(), b"seed".to_vec());
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.files.lock().await.contains_key(key)
    }

    /// Keys passed to `delete`, in call order.
    pub async fn deleted(&self) -> Vec<String> {
        self.deleted.lock().await.clone()
    }
}

#[cfg(test)]
#[async_trait]
impl MediaStorage for MemoryStorage {
    async fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.files
            .lock()
            .await
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.deleted.lock().await.push(key.to_string());

        if self.fail_deletes {
            return Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }

        self.files.lock().await.remove(key);
        Ok(())
    }
}
