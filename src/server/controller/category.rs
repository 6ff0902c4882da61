use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::category::CategoryDto,
    server::{
        controller::form::MediaForm,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::category::{CreateCategoryParams, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
    },
};

/// List all categories.
///
/// # Returns
/// - `200 OK` - Categories ordered by id
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db, state.storage.as_ref())
        .get_all()
        .await?;

    let categories: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(categories)))
}

/// Create a category.
///
/// Multipart fields: `name` (required), `description`, `icon` (file).
///
/// # Access Control
/// - `Admin` - Only admins can create categories
///
/// # Returns
/// - `201 Created` - The new category
/// - `400 Bad Request` - Missing name or rejected icon
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let mut form = MediaForm::read(multipart).await?;

    let params = CreateCategoryParams {
        name: form.required_text("name")?,
        description: form.text("description").filter(|d| !d.is_empty()),
        icon: form.take_file("icon"),
    };

    let category = CategoryService::new(&state.db, state.storage.as_ref())
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Update a category.
///
/// Multipart fields, all optional: `name`, `description`, `icon` (file) and
/// `clear_icon` (`true` removes the icon when no new file is sent).
///
/// # Access Control
/// - `Admin` - Only admins can update categories
///
/// # Returns
/// - `200 OK` - The updated category
/// - `400 Bad Request` - Rejected icon or name too long
/// - `404 Not Found` - Unknown category
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let mut form = MediaForm::read(multipart).await?;

    let params = UpdateCategoryParams {
        id: category_id,
        name: form.text("name").filter(|n| !n.is_empty()),
        description: form.text("description"),
        icon: form.take_file_update("icon", "clear_icon"),
    };

    let category = CategoryService::new(&state.db, state.storage.as_ref())
        .update(params)
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category, its servers and channels, and every file they own.
///
/// # Access Control
/// - `Admin` - Only admins can delete categories
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `404 Not Found` - Unknown category
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db, state.storage.as_ref())
        .delete(category_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
