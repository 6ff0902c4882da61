//! Multipart form collection for endpoints accepting uploads.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::server::{
    error::validation::ValidationError,
    model::media::{FileUpdate, UploadedFile},
};

/// Text fields and files of a multipart body, keyed by field name.
///
/// A file input submitted without a file arrives as an empty part with an empty
/// filename and is treated as absent.
#[derive(Debug, Default)]
pub struct MediaForm {
    texts: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MediaForm {
    /// Reads every part of the body.
    ///
    /// # Returns
    /// - `Ok(MediaForm)` - Collected fields, later duplicates win
    /// - `Err(ValidationError::Multipart)` - Malformed body
    pub async fn read(mut multipart: Multipart) -> Result<Self, ValidationError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ValidationError::Multipart(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ValidationError::Multipart(e.to_string()))?;

                    if filename.is_empty() && bytes.is_empty() {
                        continue;
                    }

                    form.files
                        .insert(name, UploadedFile::new(filename, bytes.to_vec()));
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| ValidationError::Multipart(e.to_string()))?;

                    form.texts.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    /// Text value of `name`, if sent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.texts.get(name).cloned()
    }

    /// Text value of `name`, failing when it is missing or empty.
    pub fn required_text(&self, name: &'static str) -> Result<String, ValidationError> {
        self.text(name)
            .filter(|value| !value.is_empty())
            .ok_or(ValidationError::MissingField(name))
    }

    /// Whether `name` was sent with the value `true`.
    pub fn flag(&self, name: &str) -> bool {
        self.texts.get(name).map(String::as_str) == Some("true")
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    /// Change requested for file column `name`.
    ///
    /// An uploaded file wins over the `clear_flag` checkbox.
    pub fn take_file_update(&mut self, name: &str, clear_flag: &str) -> FileUpdate {
        match self.take_file(name) {
            Some(file) => FileUpdate::Replace(file),
            None if self.flag(clear_flag) => FileUpdate::Clear,
            None => FileUpdate::Keep,
        }
    }
}
