use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::server::{CreateServerDto, ServerDto, ServerListQueryDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::server::{CreateServerParams, ServerListQuery},
        service::server::ServerService,
        state::AppState,
    },
};

/// List servers.
///
/// Public endpoint; `by_user` and `by_serverid` additionally need a logged-in caller.
///
/// # Query Parameters
/// - `category` - Exact category name
/// - `with_num_members` - `true` adds `member_count` to every server
/// - `by_user` - `true` keeps only servers the caller is a member of
/// - `by_serverid` - Keep only the server with this id
/// - `qty` - Return at most this many servers
///
/// # Returns
/// - `200 OK` - Servers ordered by id
/// - `400 Bad Request` - Unknown server id or malformed `by_serverid`/`qty`
/// - `401 Unauthorized` - Caller required but not logged in
/// - `500 Internal Server Error` - Database error
pub async fn get_servers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ServerListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).current_account().await?;

    let service = ServerService::new(&state.db, state.storage.as_ref());

    let servers = service
        .list(
            ServerListQuery::from_dto(params),
            caller.map(|account| account.id),
        )
        .await?;

    let servers: Vec<ServerDto> = servers.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(servers)))
}

/// Create a server owned by the caller.
///
/// # Returns
/// - `201 Created` - The new server
/// - `400 Bad Request` - Name or description too long
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown category
pub async fn create_server(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateServerDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ServerService::new(&state.db, state.storage.as_ref());

    let server = service
        .create(CreateServerParams::from_dto(caller.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(server.into_dto())))
}

/// Delete a server with its channels and their files.
///
/// # Access Control
/// - Server owner or admin
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Neither owner nor admin
/// - `404 Not Found` - Unknown server
pub async fn delete_server(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ServerService::new(&state.db, state.storage.as_ref())
        .delete(server_id, &caller)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Join a server.
///
/// # Returns
/// - `201 Created` - Joined
/// - `200 OK` - Already a member
/// - `404 Not Found` - Unknown server
pub async fn join_server(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let joined = ServerService::new(&state.db, state.storage.as_ref())
        .join(server_id, caller.id)
        .await?;

    Ok(if joined {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    })
}

/// Leave a server.
///
/// # Returns
/// - `204 No Content` - Left, or was not a member
/// - `404 Not Found` - Unknown server
pub async fn leave_server(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ServerService::new(&state.db, state.storage.as_ref())
        .leave(server_id, caller.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
