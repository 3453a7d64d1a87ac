//! Inventory item factory for creating test stock rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating inventory items.
pub struct InventoryItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    sku: String,
    quantity: i32,
    reorder_threshold: i32,
    unit_price_cents: i64,
}

impl<'a> InventoryItemFactory<'a> {
    /// Creates a new InventoryItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Part {id}"`
    /// - sku: `"SKU-{id}"`
    /// - quantity: `20`, reorder_threshold: `5`
    /// - unit_price_cents: `1500`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Part {}", id),
            sku: format!("SKU-{}", id),
            quantity: 20,
            reorder_threshold: 5,
            unit_price_cents: 1500,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn reorder_threshold(mut self, reorder_threshold: i32) -> Self {
        self.reorder_threshold = reorder_threshold;
        self
    }

    /// Builds and inserts the inventory row.
    pub async fn build(self) -> Result<entity::inventory_item::Model, DbErr> {
        let now = Utc::now();
        entity::inventory_item::ActiveModel {
            name: ActiveValue::Set(self.name),
            sku: ActiveValue::Set(self.sku),
            description: ActiveValue::Set(None),
            quantity: ActiveValue::Set(self.quantity),
            reorder_threshold: ActiveValue::Set(self.reorder_threshold),
            unit_price_cents: ActiveValue::Set(self.unit_price_cents),
            supplier: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inventory item with default values.
pub async fn create_inventory_item(
    db: &DatabaseConnection,
) -> Result<entity::inventory_item::Model, DbErr> {
    InventoryItemFactory::new(db).build().await
}
