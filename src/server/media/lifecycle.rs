//! Keeps stored files in step with the records that reference them.
//!
//! Services call [`MediaLifecycle`] explicitly around repository writes:
//!
//! - `before_save` once the incoming version of an existing record is known, before it
//!   is persisted. Every file the record stops referencing is removed.
//! - `before_delete` before a record is removed. Every file it references is removed.
//!
//! Removal is best effort. A failing deletion is logged and never aborts the save or
//! delete, which also means nothing restores a file if the following database write
//! fails.

use crate::server::{
    error::storage::StorageError,
    media::storage::MediaStorage,
    model::media::UploadedFile,
};

/// A column holding the storage key of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileField {
    Icon,
    Banner,
}

impl FileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Icon => "icon",
            Self::Banner => "banner",
        }
    }
}

/// Records owning uploaded files.
pub trait MediaFields {
    /// File columns of this record type.
    const FILE_FIELDS: &'static [FileField];

    /// Storage key currently held by `field`, if any.
    fn file_key(&self, field: FileField) -> Option<&str>;
}

impl MediaFields for entity::category::Model {
    const FILE_FIELDS: &'static [FileField] = &[FileField::Icon];

    fn file_key(&self, field: FileField) -> Option<&str> {
        match field {
            FileField::Icon => self.icon.as_deref(),
            FileField::Banner => None,
        }
    }
}

impl MediaFields for entity::channel::Model {
    const FILE_FIELDS: &'static [FileField] = &[FileField::Icon, FileField::Banner];

    fn file_key(&self, field: FileField) -> Option<&str> {
        match field {
            FileField::Icon => self.icon.as_deref(),
            FileField::Banner => self.banner.as_deref(),
        }
    }
}

pub struct MediaLifecycle<'a> {
    storage: &'a dyn MediaStorage,
}

impl<'a> MediaLifecycle<'a> {
    pub fn new(storage: &'a dyn MediaStorage) -> Self {
        Self { storage }
    }

    /// Removes files of `existing` that `incoming` no longer references.
    ///
    /// A field whose key is unchanged keeps its file, so re-uploading a file under the
    /// same name deletes nothing.
    ///
    /// # Arguments
    /// - `existing` - The persisted version of the record
    /// - `incoming` - The version about to be persisted
    pub async fn before_save<T: MediaFields>(&self, existing: &T, incoming: &T) {
        for field in T::FILE_FIELDS {
            let Some(previous) = existing.file_key(*field) else {
                continue;
            };

            if incoming.file_key(*field) != Some(previous) {
                self.discard(*field, previous).await;
            }
        }
    }

    /// Removes every file referenced by `record`.
    pub async fn before_delete<T: MediaFields>(&self, record: &T) {
        for field in T::FILE_FIELDS {
            if let Some(key) = record.file_key(*field) {
                self.discard(*field, key).await;
            }
        }
    }

    /// Writes an uploaded file under `key` and hands the key back for persisting.
    pub async fn store(&self, key: String, file: &UploadedFile) -> Result<String, StorageError> {
        self.storage.save(&key, &file.bytes).await?;

        Ok(key)
    }

    async fn discard(&self, field: FileField, key: &str) {
        if let Err(e) = self.storage.delete(key).await {
            tracing::warn!("Failed to remove {} file {}: {}", field.as_str(), key, e);
        }
    }
}
