use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, notification::NotificationDto},
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::notification::NotificationService, state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

#[derive(Deserialize)]
pub struct NotificationListParams {
    #[serde(default)]
    pub unread: bool,
}

/// The caller's notifications, newest first. Polled by the frontend.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("unread" = Option<bool>, Query, description = "Only unread notifications")
    ),
    responses(
        (status = 200, description = "Successfully retrieved notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<NotificationListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let notifications = NotificationService::new(&state.db)
        .list(&user, params.unread)
        .await?;
    let notifications: Vec<NotificationDto> =
        notifications.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(notifications)))
}

/// Mark one notification read.
///
/// # Returns
/// - `200 OK` - The updated notification
/// - `404 Not Found` - Missing, or addressed to another user
#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Successfully marked read", body = NotificationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let notification = NotificationService::new(&state.db)
        .mark_read(&user, notification_id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 204, description = "Successfully marked all read"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    NotificationService::new(&state.db)
        .mark_all_read(&user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
