use thiserror::Error;

/// Failures of the media storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The key would resolve outside of the media root.
    #[error("Refusing to use storage key '{0}'")]
    InvalidKey(String),

    /// Reading or writing the backing file failed.
    #[error("Storage operation on '{key}' failed: {source}")]
    Io {
        /// Storage key of the blob
        key: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
