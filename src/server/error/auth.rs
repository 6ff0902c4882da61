use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The operation needs a caller identity and none was resolved.
    ///
    /// Raised when the session holds no account id or the stored id no longer
    /// matches an account. Results in a 401 Unauthorized response.
    #[error("Authentication required but no account is associated with the session")]
    AuthenticationFailed,

    /// The caller is authenticated but not allowed to perform the operation.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - Account id of the caller
    /// - Reason, logged server-side only
    #[error("Account {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `AuthenticationFailed` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden, reason logged at debug level
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthenticationFailed => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    detail: "Incorrect authentication credentials.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(account_id, reason) => {
                tracing::debug!("Access denied for account {}: {}", account_id, reason);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        detail: "You do not have permission to perform this action.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
