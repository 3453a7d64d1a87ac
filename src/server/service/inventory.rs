//! Parts inventory with low-stock alerts.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::inventory::InventoryRepository,
        error::AppError,
        model::{
            inventory::{CreateInventoryItemParams, InventoryItem, UpdateInventoryItemParams},
            notification::KIND_LOW_STOCK,
        },
        service::notification::NotificationService,
    },
};

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists items ordered by name, optionally only those at or below threshold.
    pub async fn list(&self, low_stock_only: bool) -> Result<Vec<InventoryItem>, AppError> {
        let repo = InventoryRepository::new(self.db);
        let items = if low_stock_only {
            repo.get_low_stock().await?
        } else {
            repo.get_all().await?
        };

        Ok(items)
    }

    pub async fn get(&self, id: i32) -> Result<InventoryItem, AppError> {
        InventoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inventory item {} not found", id)))
    }

    /// Duplicate SKUs surface as a unique violation (409).
    pub async fn create(&self, params: CreateInventoryItemParams) -> Result<InventoryItem, AppError> {
        Ok(InventoryRepository::new(self.db).create(params).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateInventoryItemParams,
    ) -> Result<InventoryItem, AppError> {
        InventoryRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inventory item {} not found", id)))
    }

    /// Applies a stock change.
    ///
    /// Shop leads are notified only when this adjustment takes the item from above its
    /// reorder threshold to at or below it, so repeated withdrawals from an already low
    /// item don't repeat the alert.
    ///
    /// # Returns
    /// - `Ok(InventoryItem)` - Item after the adjustment
    /// - `Err(AppError::BadRequest)` - Zero delta
    /// - `Err(AppError::NotFound)` - No item with that ID
    pub async fn adjust(&self, id: i32, delta: i32) -> Result<InventoryItem, AppError> {
        if delta == 0 {
            return Err(AppError::BadRequest("Adjustment cannot be zero".to_string()));
        }

        let (before, after) = InventoryRepository::new(self.db)
            .adjust_quantity(id, delta)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inventory item {} not found", id)))?;

        if !before.is_low_stock() && after.is_low_stock() {
            let message = format!(
                "{} ({}) is low on stock: {} left, reorder threshold {}",
                after.name, after.sku, after.quantity, after.reorder_threshold
            );
            let notified = NotificationService::new(self.db)
                .notify_role(Role::ShopLead, KIND_LOW_STOCK, &message)
                .await?;

            tracing::info!(
                "Item {} crossed its reorder threshold, notified {} shop leads",
                after.id,
                notified
            );
        }

        Ok(after)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !InventoryRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Inventory item {} not found", id)));
        }

        Ok(())
    }
}
