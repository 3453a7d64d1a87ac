use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, LoginDto, RegisterDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{NewAccountParams, User},
        service::auth::AuthService,
        state::AppState,
        util::validation::{normalize_email, RequiredFields},
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn auth_response(token: String, user: User) -> AuthResponseDto {
    AuthResponseDto {
        token,
        user: user.into_dto(),
    }
}

/// Create a client account and sign it in.
///
/// Self sign up always produces a `client`; staff accounts are created by a shop lead
/// through the users endpoints.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - Token and the new user
/// - `400 Bad Request` - Missing field, malformed email, or short password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = NewAccountParams::from_register_dto(payload)?;

    let (token, user) = AuthService::new(state.user_store.as_ref(), &state.tokens)
        .register(account)
        .await?;

    Ok((StatusCode::CREATED, Json(auth_response(token, user))))
}

/// Exchange email and password for a bearer token.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Token and the signed-in user
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Account deactivated
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = AuthResponseDto),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let mut required = RequiredFields::new();
    let email = required.text("email", payload.email);
    let password = required.value("password", payload.password);
    required.finish()?;

    let (token, user) = AuthService::new(state.user_store.as_ref(), &state.tokens)
        .login(&normalize_email(&email), &password)
        .await?;

    Ok((StatusCode::OK, Json(auth_response(token, user))))
}

/// Get the currently authenticated user.
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Missing, invalid, or expired token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
