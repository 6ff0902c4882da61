//! Uploaded file payloads and how they change a file column.

/// A file received from a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Filename as sent by the client, unsanitized.
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// Requested change to a file column on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FileUpdate {
    /// Leave the stored file untouched.
    #[default]
    Keep,
    /// Drop the reference; the stored file is removed.
    Clear,
    /// Store a new file in place of the current one.
    Replace(UploadedFile),
}

impl FileUpdate {
    /// The uploaded file, when this update carries one.
    pub fn upload(&self) -> Option<&UploadedFile> {
        match self {
            Self::Replace(file) => Some(file),
            Self::Keep | Self::Clear => None,
        }
    }
}
