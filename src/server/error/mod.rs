//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Every error body has the shape `{"error": "...", "details": ...}` where `details`
//! is only present when there is structured context to report.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations become 409 Conflict, foreign key violations
    /// become 400 Bad Request. Everything else is a 500 with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Cron scheduler error.
    ///
    /// Results in 500 Internal Server Error when scheduled job operations fail.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// One or more required fields were absent or blank.
    ///
    /// Results in 400 Bad Request with `details.missing_fields` listing the field names.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Uniqueness conflict detected before touching the database.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `MissingFields` and foreign key violations
/// - 404 Not Found - For `NotFound` and `DbErr::RecordNotFound`
/// - 409 Conflict - For `Conflict` and unique constraint violations
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Missing required fields".to_string(),
                    details: Some(json!({ "missing_fields": fields })),
                }),
            )
                .into_response(),
            Self::Conflict(msg) => (StatusCode::CONFLICT, Json(ErrorDto::new(msg))).into_response(),
            Self::DbErr(err) => db_error_response(err),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Translates relational constraint failures into client errors.
///
/// `DbErr::sql_err` inspects the driver error code, so this works for any
/// SeaORM backend rather than matching on message text.
fn db_error_response(err: DbErr) -> Response {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violation: {}", detail);
            (
                StatusCode::CONFLICT,
                Json(ErrorDto::new("A record with the same unique value already exists")),
            )
                .into_response()
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!("Foreign key violation: {}", detail);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("Referenced record does not exist")),
            )
                .into_response()
        }
        _ => match err {
            DbErr::RecordNotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        },
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
