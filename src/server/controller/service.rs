use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        service::{CreateServiceDto, ServiceDto, UpdateServiceDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::service::{CreateServiceParams, UpdateServiceParams},
        service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping service catalog endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

/// List the active service catalog, ordered by name.
///
/// Public so the catalog can be browsed before signing in.
#[utoipa::path(
    get,
    path = "/api/services",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved services", body = Vec<ServiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let services = CatalogService::new(&state.db).list().await?;
    let services: Vec<ServiceDto> = services.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(services)))
}

#[utoipa::path(
    get,
    path = "/api/services/{service_id}",
    tag = SERVICE_TAG,
    params(
        ("service_id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved service", body = ServiceDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(service_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db).get(service_id).await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

/// Add a service to the catalog.
///
/// # Access Control
/// - `ShopLead`
///
/// # Returns
/// - `201 Created` - The new service
/// - `400 Bad Request` - Missing field, negative price, or non-positive duration
/// - `409 Conflict` - A service with that name exists
#[utoipa::path(
    post,
    path = "/api/services",
    tag = SERVICE_TAG,
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Successfully created service", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 409, description = "Service name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    let params = CreateServiceParams::from_dto(payload)?;
    let service = CatalogService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(service.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/services/{service_id}",
    tag = SERVICE_TAG,
    params(
        ("service_id" = i32, Path, description = "Service ID")
    ),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Successfully updated service", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 409, description = "Service name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(service_id): Path<i32>,
    Json(payload): Json<UpdateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    let params = UpdateServiceParams::from_dto(payload)?;
    let service = CatalogService::new(&state.db)
        .update(service_id, params)
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

/// Remove a service from the catalog. Existing appointments keep referencing it.
#[utoipa::path(
    delete,
    path = "/api/services/{service_id}",
    tag = SERVICE_TAG,
    params(
        ("service_id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 204, description = "Successfully deactivated service"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(service_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    CatalogService::new(&state.db).delete(service_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
