use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::HealthDto, server::state::AppState};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check.
///
/// `user_store` is `memory` while the server runs on the in-memory fallback, in which
/// case only identity endpoints work.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is up", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            user_store: state.user_store.kind().as_str().to_string(),
        }),
    )
}
