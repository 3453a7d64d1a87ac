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
        client::{ClientDetailDto, ClientSummaryDto, UpdateClientDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::UpdateUserParams,
        service::client::ClientService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

#[derive(Deserialize)]
pub struct ClientSearchParams {
    pub search: Option<String>,
}

/// List active clients with their vehicle counts.
///
/// # Access Control
/// - `Staff` - Mechanics and shop leads
///
/// # Returns
/// - `200 OK` - Clients whose name or email contains `search`, or all clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    params(
        ("search" = Option<String>, Query, description = "Name or email substring")
    ),
    responses(
        (status = 200, description = "Successfully retrieved clients", body = Vec<ClientSummaryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ClientSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Staff])
        .await?;

    let clients = ClientService::new(&state.db).list(params.search).await?;
    let clients: Vec<ClientSummaryDto> = clients.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(clients)))
}

/// Get a client with their active vehicles.
#[utoipa::path(
    get,
    path = "/api/clients/{client_id}",
    tag = CLIENT_TAG,
    params(
        ("client_id" = i32, Path, description = "Client user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved client", body = ClientDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Staff])
        .await?;

    let client = ClientService::new(&state.db).get(client_id).await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Update a client's contact details.
///
/// # Returns
/// - `200 OK` - Updated client
/// - `404 Not Found` - Not an active client
/// - `409 Conflict` - Email belongs to another account
#[utoipa::path(
    put,
    path = "/api/clients/{client_id}",
    tag = CLIENT_TAG,
    params(
        ("client_id" = i32, Path, description = "Client user ID")
    ),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Successfully updated client", body = UserDto),
        (status = 400, description = "Invalid email", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(client_id): Path<i32>,
    Json(payload): Json<UpdateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Staff])
        .await?;

    let params = UpdateUserParams::from_client_dto(payload)?;
    let client = ClientService::new(&state.db).update(client_id, params).await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Deactivate a client.
///
/// # Access Control
/// - `ShopLead`
#[utoipa::path(
    delete,
    path = "/api/clients/{client_id}",
    tag = CLIENT_TAG,
    params(
        ("client_id" = i32, Path, description = "Client user ID")
    ),
    responses(
        (status = 204, description = "Successfully deactivated client"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    ClientService::new(&state.db).delete(client_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
