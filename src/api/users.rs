//! User directory endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        user::{CreateUser, UserQuery},
        UserAccount,
    },
    services::directory::UserPage,
};

/// Toggle selection of one directory row
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserSelectionUpdate {
    pub id: Uuid,
    pub selected: bool,
}

/// List users, filtered by search term and role
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(UserQuery),
    responses(
        (status = 200, description = "Filtered user page", body = UserPage)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    Query(query): Query<UserQuery>,
) -> Json<UserPage> {
    Json(state.services.directory.list(&query).await)
}

/// Get one user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User account", body = UserAccount),
        (status = 404, description = "Unknown user")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserAccount>> {
    Ok(Json(state.services.directory.get(id).await?))
}

/// Create a user account
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserAccount),
        (status = 400, description = "Invalid fields"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<UserAccount>)> {
    let account = state.services.directory.create(request).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// Toggle one row in the directory selection
#[utoipa::path(
    put,
    path = "/users/selection",
    tag = "users",
    request_body = UserSelectionUpdate,
    responses(
        (status = 204, description = "Selection updated")
    )
)]
pub async fn update_user_selection(
    State(state): State<crate::AppState>,
    Json(update): Json<UserSelectionUpdate>,
) -> StatusCode {
    state
        .services
        .directory
        .set_selected(update.id, update.selected)
        .await;
    StatusCode::NO_CONTENT
}

/// Select every user visible under the given filters
#[utoipa::path(
    post,
    path = "/users/selection/all",
    tag = "users",
    params(UserQuery),
    responses(
        (status = 200, description = "User ids now selected", body = Vec<Uuid>)
    )
)]
pub async fn select_all_users(
    State(state): State<crate::AppState>,
    Query(query): Query<UserQuery>,
) -> Json<Vec<Uuid>> {
    Json(state.services.directory.select_all(&query).await)
}

/// Clear the directory selection
#[utoipa::path(
    delete,
    path = "/users/selection",
    tag = "users",
    responses(
        (status = 204, description = "Selection cleared")
    )
)]
pub async fn clear_user_selection(State(state): State<crate::AppState>) -> StatusCode {
    state.services.directory.clear_selection().await;
    StatusCode::NO_CONTENT
}
