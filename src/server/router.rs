use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{
        auth::{get_user, logout},
        category::{create_category, delete_category, get_categories, update_category},
        channel::{create_channel, delete_channel, get_channels, update_channel},
        server::{create_server, delete_server, get_servers, join_server, leave_server},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/servers", get(get_servers).post(create_server))
        .route("/api/servers/{server_id}", axum::routing::delete(delete_server))
        .route(
            "/api/servers/{server_id}/members",
            post(join_server).delete(leave_server),
        )
        .route(
            "/api/servers/{server_id}/channels",
            get(get_channels).post(create_channel),
        )
        .route(
            "/api/channels/{channel_id}",
            put(update_channel).delete(delete_channel),
        )
        .route(
            "/api/categories",
            get(get_categories).post(create_category),
        )
        .route(
            "/api/categories/{category_id}",
            put(update_category).delete(delete_category),
        )
}
