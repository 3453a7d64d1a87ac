//! Inventory domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::inventory::{CreateInventoryItemDto, InventoryItemDto, UpdateInventoryItemDto},
    server::{
        error::AppError,
        util::validation::{optional_text, RequiredFields},
    },
};

/// Stocked part. Quantity may go negative after adjustments.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub reorder_threshold: i32,
    pub unit_price_cents: i64,
    pub supplier: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_threshold
    }

    pub fn into_dto(self) -> InventoryItemDto {
        let low_stock = self.is_low_stock();
        InventoryItemDto {
            id: self.id,
            name: self.name,
            sku: self.sku,
            description: self.description,
            quantity: self.quantity,
            reorder_threshold: self.reorder_threshold,
            unit_price_cents: self.unit_price_cents,
            supplier: self.supplier,
            low_stock,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::inventory_item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            sku: entity.sku,
            description: entity.description,
            quantity: entity.quantity,
            reorder_threshold: entity.reorder_threshold,
            unit_price_cents: entity.unit_price_cents,
            supplier: entity.supplier,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateInventoryItemParams {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub reorder_threshold: i32,
    pub unit_price_cents: i64,
    pub supplier: Option<String>,
}

impl CreateInventoryItemParams {
    /// # Returns
    /// - `Err(AppError::MissingFields)` - name, sku, quantity, reorder_threshold or
    ///   unit_price_cents absent
    /// - `Err(AppError::BadRequest)` - Negative unit price
    pub fn from_dto(dto: CreateInventoryItemDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let name = required.text("name", dto.name);
        let sku = required.text("sku", dto.sku);
        let quantity = required.value("quantity", dto.quantity);
        let reorder_threshold = required.value("reorder_threshold", dto.reorder_threshold);
        let unit_price_cents = required.value("unit_price_cents", dto.unit_price_cents);
        required.finish()?;

        if unit_price_cents < 0 {
            return Err(AppError::BadRequest(
                "Unit price cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            name,
            sku: sku.to_uppercase(),
            description: optional_text(dto.description),
            quantity,
            reorder_threshold,
            unit_price_cents,
            supplier: optional_text(dto.supplier),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateInventoryItemParams {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub reorder_threshold: Option<i32>,
    pub unit_price_cents: Option<i64>,
    pub supplier: Option<String>,
}

impl UpdateInventoryItemParams {
    pub fn from_dto(dto: UpdateInventoryItemDto) -> Result<Self, AppError> {
        if dto.unit_price_cents.is_some_and(|p| p < 0) {
            return Err(AppError::BadRequest(
                "Unit price cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            name: optional_text(dto.name),
            sku: optional_text(dto.sku).map(|s| s.to_uppercase()),
            description: optional_text(dto.description),
            quantity: dto.quantity,
            reorder_threshold: dto.reorder_threshold,
            unit_price_cents: dto.unit_price_cents,
            supplier: optional_text(dto.supplier),
        })
    }
}
