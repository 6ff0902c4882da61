use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    state::AppState,
};

/// Returns the logged-in account.
///
/// # Returns
/// - `200 OK` - The caller's account
/// - `401 Unauthorized` - Nobody is logged in
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Ends the current session.
///
/// # Returns
/// - `204 No Content` - Session cleared, also when nobody was logged in
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}
