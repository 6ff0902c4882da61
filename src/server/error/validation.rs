use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Malformed or semantically invalid input.
///
/// Every variant maps to 400 Bad Request with the display message as `detail`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The file extension is not in the image allow-list.
    #[error("Unsupported File Extension")]
    UnsupportedExtension,

    /// Both sides of an icon exceed the 70 pixel limit.
    #[error("The maximum allowed dimension for the image are 70x70 - size you provided ({width}, {height})")]
    IconTooLarge { width: u32, height: u32 },

    /// The uploaded bytes could not be decoded as an image.
    #[error("Upload a valid image. The file you uploaded was either not an image or a corrupted image.")]
    UnreadableImage,

    /// `by_serverid` named a server absent from the filtered listing.
    #[error("Server with id {0} not found")]
    ServerNotFound(i32),

    /// Any other failure while applying the `by_serverid` filter.
    #[error("Server value error")]
    ServerValue,

    /// `qty` was not a non-negative integer.
    #[error("Invalid qty value")]
    InvalidQuantity,

    #[error("Ensure {field} has at most {max} characters.")]
    TooLong { field: &'static str, max: usize },

    #[error("{0}: This field is required.")]
    MissingField(&'static str),

    #[error("Malformed form data: {0}")]
    Multipart(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
