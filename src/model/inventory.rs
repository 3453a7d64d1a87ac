use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct InventoryItemDto {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub reorder_threshold: i32,
    pub unit_price_cents: i64,
    pub supplier: Option<String>,
    /// `quantity <= reorder_threshold`
    pub low_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Required: name, sku, quantity, reorder_threshold, unit_price_cents.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CreateInventoryItemDto {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub reorder_threshold: Option<i32>,
    pub unit_price_cents: Option<i64>,
    pub supplier: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateInventoryItemDto {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub reorder_threshold: Option<i32>,
    pub unit_price_cents: Option<i64>,
    pub supplier: Option<String>,
}

/// Signed stock change; negative values take stock out.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct AdjustStockDto {
    pub delta: Option<i32>,
}
