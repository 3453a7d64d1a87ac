use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, PaginatedUsersDto, Role, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{GetAllUsersParam, NewAccountParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user management endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize)]
pub struct UserListParams {
    pub role: Option<Role>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Get a page of active users.
///
/// # Access Control
/// - `ShopLead` - Only shop leads can list accounts
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `params` - Optional role filter plus pagination (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated users ordered by name
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not a shop lead
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("role" = Option<Role>, Query, description = "Only users with this role"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    let users = UserService::new(&state.db, state.user_store.as_ref())
        .get_all_users(GetAllUsersParam {
            role: params.role,
            page: params.page,
            per_page: params.entries,
        })
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Create an account with any role.
///
/// # Access Control
/// - `ShopLead` - Only shop leads can create accounts
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Missing field, malformed email, or short password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    let account = NewAccountParams::from_dto(payload)?;
    let user = UserService::new(&state.db, state.user_store.as_ref())
        .create(account)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Update a user's name, phone, or role.
///
/// # Access Control
/// - `ShopLead`
///
/// # Returns
/// - `200 OK` - Updated user
/// - `404 Not Found` - No active user with that ID
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    let user = UserService::new(&state.db, state.user_store.as_ref())
        .update(user_id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Deactivate a user.
///
/// # Access Control
/// - `ShopLead` - Cannot target their own account
///
/// # Returns
/// - `204 No Content` - User deactivated
/// - `400 Bad Request` - Shop lead tried to deactivate themselves
/// - `404 Not Found` - No active user with that ID
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deactivated user"),
        (status = 400, description = "Cannot deactivate own account", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    UserService::new(&state.db, state.user_store.as_ref())
        .delete(&actor, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
