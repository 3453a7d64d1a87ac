use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::server::{
    error::AppError,
    util::test::{app_state, bearer_headers},
};
use test_utils::{builder::TestBuilder, factory};

mod inventory;

/// Renders a handler result the way axum would and parses the JSON body.
///
/// Empty bodies (204) come back as `Value::Null`.
async fn respond<R: IntoResponse>(result: Result<R, AppError>) -> (StatusCode, Value) {
    let response = match result {
        Ok(ok) => ok.into_response(),
        Err(err) => err.into_response(),
    };
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
