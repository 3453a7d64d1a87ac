use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        appointment::{AppointmentDto, CreateAppointmentDto, UpdateAppointmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::appointment::{CreateAppointmentParams, UpdateAppointmentParams},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

#[derive(Deserialize)]
pub struct AppointmentListParams {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

/// List appointments visible to the caller, ordered by start time.
///
/// Clients see their own bookings, mechanics the appointments assigned to them, and shop
/// leads everything. `from` and `to` bound the start time for calendar views.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `params` - Optional start time range and status filter
///
/// # Returns
/// - `200 OK` - Appointments with client, vehicle, service and mechanic names
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    params(
        ("from" = Option<DateTime<Utc>>, Query, description = "Inclusive lower bound on start time"),
        ("to" = Option<DateTime<Utc>>, Query, description = "Exclusive upper bound on start time"),
        ("status" = Option<String>, Query, description = "Exact status")
    ),
    responses(
        (status = 200, description = "Successfully retrieved appointments", body = Vec<AppointmentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AppointmentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let appointments = AppointmentService::new(&state.db)
        .list(&user, params.from, params.to, params.status)
        .await?;
    let appointments: Vec<AppointmentDto> =
        appointments.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(appointments)))
}

#[utoipa::path(
    get,
    path = "/api/appointments/{appointment_id}",
    tag = APPOINTMENT_TAG,
    params(
        ("appointment_id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved appointment", body = AppointmentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Appointment not visible to caller", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(appointment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let appointment = AppointmentService::new(&state.db)
        .get(&user, appointment_id)
        .await?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

/// Book an appointment.
///
/// End time and cost come from the chosen service. Staff may book for any client, in
/// which case `user_id` defaults to the vehicle's owner.
///
/// # Access Control
/// - Clients book for themselves
/// - Staff book for any client
/// - Only shop leads may set `mechanic_id`
///
/// # Returns
/// - `201 Created` - The new appointment
/// - `400 Bad Request` - Missing field, inactive vehicle/service, vehicle not owned by the
///   client, or invalid mechanic
/// - `403 Forbidden` - Client booking for someone else or assigning a mechanic
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Successfully booked appointment", body = AppointmentDto),
        (status = 400, description = "Invalid booking", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to book this appointment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let params = CreateAppointmentParams::from_dto(payload)?;
    let appointment = AppointmentService::new(&state.db)
        .create(&user, params)
        .await?;

    Ok((StatusCode::CREATED, Json(appointment.into_dto())))
}

/// Change an appointment.
///
/// # Access Control
/// - Client owner: start time, notes, and cancelling
/// - Assigned mechanic: status and notes
/// - `ShopLead`: anything, including `unassign_mechanic`
///
/// # Returns
/// - `200 OK` - Updated appointment
/// - `400 Bad Request` - Blank status, inactive service, invalid mechanic, or
///   `mechanic_id` sent with `unassign_mechanic`
/// - `403 Forbidden` - Change not allowed for the caller
/// - `404 Not Found` - Appointment not found
#[utoipa::path(
    put,
    path = "/api/appointments/{appointment_id}",
    tag = APPOINTMENT_TAG,
    params(
        ("appointment_id" = i32, Path, description = "Appointment ID")
    ),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Successfully updated appointment", body = AppointmentDto),
        (status = 400, description = "Invalid change", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Change not allowed", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(appointment_id): Path<i32>,
    Json(payload): Json<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let params = UpdateAppointmentParams::from_dto(payload)?;
    if params.is_empty() {
        return Err(AppError::BadRequest("No changes provided".to_string()));
    }

    let appointment = AppointmentService::new(&state.db)
        .update(&user, appointment_id, params)
        .await?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

/// Delete an appointment.
///
/// # Access Control
/// - Client owner or `ShopLead`
#[utoipa::path(
    delete,
    path = "/api/appointments/{appointment_id}",
    tag = APPOINTMENT_TAG,
    params(
        ("appointment_id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted appointment"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner or a shop lead", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(appointment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    AppointmentService::new(&state.db)
        .delete(&user, appointment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
