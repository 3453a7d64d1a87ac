use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        report::{DashboardDto, RevenueReportDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::report::ReportService,
        state::AppState,
        util::validation::RequiredFields,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

#[derive(Deserialize)]
pub struct DashboardParams {
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct RevenueParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Daily summary for the shop lead dashboard.
///
/// # Access Control
/// - `ShopLead`
///
/// # Returns
/// - `200 OK` - Revenue, appointment counts by status, low-stock count and active
///   clients for `date` (UTC, default today)
#[utoipa::path(
    get,
    path = "/api/reports/dashboard",
    tag = REPORT_TAG,
    params(
        ("date" = Option<NaiveDate>, Query, description = "UTC day, YYYY-MM-DD (default: today)")
    ),
    responses(
        (status = 200, description = "Successfully built dashboard", body = DashboardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DashboardParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());
    let dashboard = ReportService::new(&state.db).dashboard(date).await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// Completed-appointment revenue per day.
///
/// # Access Control
/// - `ShopLead`
///
/// # Returns
/// - `200 OK` - One entry per day in `[from, to]`, zero days included
/// - `400 Bad Request` - Missing bound, `to` before `from`, or more than 366 days
#[utoipa::path(
    get,
    path = "/api/reports/revenue",
    tag = REPORT_TAG,
    params(
        ("from" = NaiveDate, Query, description = "First day, YYYY-MM-DD"),
        ("to" = NaiveDate, Query, description = "Last day (inclusive), YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Successfully built revenue report", body = RevenueReportDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_revenue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<RevenueParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    let mut required = RequiredFields::new();
    let from = required.value("from", params.from);
    let to = required.value("to", params.to);
    required.finish()?;

    let report = ReportService::new(&state.db).revenue(from, to).await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
