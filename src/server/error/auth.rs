use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token signature, format or expiry check failed.
    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    /// Login with an unknown email or a wrong password.
    ///
    /// Both cases share one variant so responses don't reveal which emails exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token subject no longer resolves to an active user.
    #[error("User {0} not found or inactive")]
    UserNotFound(i32),

    /// Account exists but has been deactivated.
    #[error("Account {0} is inactive")]
    AccountInactive(i32),

    /// Authenticated user lacks the role or ownership required.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Reason logged server-side
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` / `UserNotFound` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccountInactive` / `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotFound(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccountInactive(_) => (StatusCode::FORBIDDEN, "Account is inactive"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
