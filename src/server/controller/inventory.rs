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
        inventory::{
            AdjustStockDto, CreateInventoryItemDto, InventoryItemDto, UpdateInventoryItemDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::inventory::{CreateInventoryItemParams, UpdateInventoryItemParams},
        service::inventory::InventoryService,
        state::AppState,
        util::validation::RequiredFields,
    },
};

/// Tag for grouping inventory endpoints in OpenAPI documentation
pub static INVENTORY_TAG: &str = "inventory";

#[derive(Deserialize)]
pub struct InventoryListParams {
    #[serde(default)]
    pub low_stock: bool,
}

/// List parts inventory ordered by name.
///
/// # Access Control
/// - `Staff`
///
/// # Returns
/// - `200 OK` - Items; only those at or below their reorder threshold when `low_stock=true`
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    params(
        ("low_stock" = Option<bool>, Query, description = "Only items at or below their reorder threshold")
    ),
    responses(
        (status = 200, description = "Successfully retrieved inventory", body = Vec<InventoryItemDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<InventoryListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Staff])
        .await?;

    let items = InventoryService::new(&state.db).list(params.low_stock).await?;
    let items: Vec<InventoryItemDto> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(items)))
}

#[utoipa::path(
    get,
    path = "/api/inventory/{item_id}",
    tag = INVENTORY_TAG,
    params(
        ("item_id" = i32, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved item", body = InventoryItemDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Staff])
        .await?;

    let item = InventoryService::new(&state.db).get(item_id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Add an inventory item.
///
/// # Access Control
/// - `ShopLead`
///
/// # Returns
/// - `201 Created` - The new item
/// - `400 Bad Request` - Missing field or negative price
/// - `409 Conflict` - SKU already exists
#[utoipa::path(
    post,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    request_body = CreateInventoryItemDto,
    responses(
        (status = 201, description = "Successfully created item", body = InventoryItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 409, description = "SKU already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inventory_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateInventoryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    let params = CreateInventoryItemParams::from_dto(payload)?;
    let item = InventoryService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/inventory/{item_id}",
    tag = INVENTORY_TAG,
    params(
        ("item_id" = i32, Path, description = "Inventory item ID")
    ),
    request_body = UpdateInventoryItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = InventoryItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 409, description = "SKU already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_inventory_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
    Json(payload): Json<UpdateInventoryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    let params = UpdateInventoryItemParams::from_dto(payload)?;
    let item = InventoryService::new(&state.db).update(item_id, params).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Add or remove stock.
///
/// Crossing the reorder threshold notifies every shop lead.
///
/// # Access Control
/// - `Staff`
///
/// # Returns
/// - `200 OK` - Item after the adjustment
/// - `400 Bad Request` - `delta` missing or zero
/// - `404 Not Found` - Item not found
#[utoipa::path(
    post,
    path = "/api/inventory/{item_id}/adjust",
    tag = INVENTORY_TAG,
    params(
        ("item_id" = i32, Path, description = "Inventory item ID")
    ),
    request_body = AdjustStockDto,
    responses(
        (status = 200, description = "Successfully adjusted stock", body = InventoryItemDto),
        (status = 400, description = "Missing or zero delta", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn adjust_inventory_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
    Json(payload): Json<AdjustStockDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Staff])
        .await?;

    let mut required = RequiredFields::new();
    let delta = required.value("delta", payload.delta);
    required.finish()?;

    let item = InventoryService::new(&state.db).adjust(item_id, delta).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/inventory/{item_id}",
    tag = INVENTORY_TAG,
    params(
        ("item_id" = i32, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted item"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a shop lead", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_inventory_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await?;

    InventoryService::new(&state.db).delete(item_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
