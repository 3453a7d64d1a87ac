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
        maintenance::{CreateMaintenanceEntryDto, MaintenanceEntryDto},
        vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            maintenance::CreateMaintenanceEntryParams,
            vehicle::{CreateVehicleParams, UpdateVehicleParams},
        },
        service::vehicle::VehicleService,
        state::AppState,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

#[derive(Deserialize)]
pub struct VehicleListParams {
    pub user_id: Option<i32>,
}

/// List active vehicles.
///
/// Clients always get their own vehicles and the `user_id` filter is ignored; staff get
/// every vehicle, optionally narrowed to one owner.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `params` - Optional owner filter
///
/// # Returns
/// - `200 OK` - Vehicles with owner names
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    params(
        ("user_id" = Option<i32>, Query, description = "Only vehicles owned by this user (staff only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicles", body = Vec<VehicleDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<VehicleListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let vehicles = VehicleService::new(&state.db)
        .list(&user, params.user_id)
        .await?;
    let vehicles: Vec<VehicleDto> = vehicles.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Get a vehicle.
///
/// # Access Control
/// - Owner or staff
#[utoipa::path(
    get,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = VehicleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let vehicle = VehicleService::new(&state.db).get(&user, vehicle_id).await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// Register a vehicle.
///
/// # Access Control
/// - Clients register vehicles for themselves
/// - Staff register vehicles for the given `user_id`
///
/// # Returns
/// - `201 Created` - The new vehicle
/// - `400 Bad Request` - Missing field, or `user_id` absent/inactive for staff
/// - `403 Forbidden` - Client registering for another user
/// - `409 Conflict` - License plate or VIN already registered
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Successfully created vehicle", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot register for another user", body = ErrorDto),
        (status = 409, description = "License plate or VIN already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let params = CreateVehicleParams::from_dto(payload)?;
    let vehicle = VehicleService::new(&state.db).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(vehicle.into_dto())))
}

/// Update a vehicle.
///
/// # Access Control
/// - Owner or staff
#[utoipa::path(
    put,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "Successfully updated vehicle", body = VehicleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 409, description = "License plate or VIN already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(vehicle_id): Path<i32>,
    Json(payload): Json<UpdateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let vehicle = VehicleService::new(&state.db)
        .update(&user, vehicle_id, UpdateVehicleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 204, description = "Successfully deactivated vehicle"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    VehicleService::new(&state.db)
        .delete(&user, vehicle_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a vehicle's maintenance history, newest first.
///
/// # Access Control
/// - Owner or staff
#[utoipa::path(
    get,
    path = "/api/vehicles/{vehicle_id}/history",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved history", body = Vec<MaintenanceEntryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let history = VehicleService::new(&state.db)
        .history(&user, vehicle_id)
        .await?;
    let history: Vec<MaintenanceEntryDto> = history.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(history)))
}

/// Record maintenance performed on a vehicle.
///
/// # Access Control
/// - `Staff`
///
/// # Returns
/// - `201 Created` - The recorded entry; vehicle mileage is raised if the entry reports more
/// - `400 Bad Request` - Missing description, negative values, or unrelated appointment
/// - `404 Not Found` - Vehicle not found
#[utoipa::path(
    post,
    path = "/api/vehicles/{vehicle_id}/history",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    request_body = CreateMaintenanceEntryDto,
    responses(
        (status = 201, description = "Successfully recorded maintenance", body = MaintenanceEntryDto),
        (status = 400, description = "Invalid maintenance data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(vehicle_id): Path<i32>,
    Json(payload): Json<CreateMaintenanceEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers)
        .require(&[Permission::Staff])
        .await?;

    let params = CreateMaintenanceEntryParams::from_dto(vehicle_id, payload)?;
    let entry = VehicleService::new(&state.db)
        .add_history(&user, params)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}
