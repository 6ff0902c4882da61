use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::channel::ChannelDto,
    server::{
        controller::form::MediaForm,
        error::AppError,
        middleware::auth::AuthGuard,
        model::channel::{CreateChannelParams, UpdateChannelParams},
        service::channel::ChannelService,
        state::AppState,
    },
};

/// List the channels of a server.
///
/// # Returns
/// - `200 OK` - Channels ordered by id, empty for unknown servers
pub async fn get_channels(
    State(state): State<AppState>,
    Path(server_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let channels = ChannelService::new(&state.db, state.storage.as_ref())
        .get_by_server(server_id)
        .await?;

    let channels: Vec<ChannelDto> = channels.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(channels)))
}

/// Create a channel in a server.
///
/// Multipart fields: `name` and `topic` (required), `icon` and `banner` (files).
///
/// # Access Control
/// - Server owner or admin
///
/// # Returns
/// - `201 Created` - The new channel
/// - `400 Bad Request` - Missing field or rejected upload
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Neither server owner nor admin
/// - `404 Not Found` - Unknown server
pub async fn create_channel(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let mut form = MediaForm::read(multipart).await?;

    let params = CreateChannelParams {
        server_id,
        name: form.required_text("name")?,
        topic: form.required_text("topic")?,
        icon: form.take_file("icon"),
        banner: form.take_file("banner"),
    };

    let channel = ChannelService::new(&state.db, state.storage.as_ref())
        .create(params, &caller)
        .await?;

    Ok((StatusCode::CREATED, Json(channel.into_dto())))
}

/// Update a channel.
///
/// Multipart fields, all optional: `name`, `topic`, `icon` and `banner` (files),
/// `clear_icon` and `clear_banner` (`true` removes the file when none is sent).
///
/// # Access Control
/// - Channel owner or admin
///
/// # Returns
/// - `200 OK` - The updated channel
/// - `400 Bad Request` - Rejected upload or text too long
/// - `403 Forbidden` - Neither channel owner nor admin
/// - `404 Not Found` - Unknown channel
pub async fn update_channel(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let mut form = MediaForm::read(multipart).await?;

    let params = UpdateChannelParams {
        id: channel_id,
        name: form.text("name").filter(|n| !n.is_empty()),
        topic: form.text("topic"),
        icon: form.take_file_update("icon", "clear_icon"),
        banner: form.take_file_update("banner", "clear_banner"),
    };

    let channel = ChannelService::new(&state.db, state.storage.as_ref())
        .update(params, &caller)
        .await?;

    Ok((StatusCode::OK, Json(channel.into_dto())))
}

/// Delete a channel and its files.
///
/// # Access Control
/// - Channel owner or admin
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `404 Not Found` - Unknown channel
pub async fn delete_channel(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ChannelService::new(&state.db, state.storage.as_ref())
        .delete(channel_id, &caller)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
