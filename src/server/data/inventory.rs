//! Inventory data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::inventory::{
    CreateInventoryItemParams, InventoryItem, UpdateInventoryItemParams,
};

pub struct InventoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(InventoryItem)` - The created item
    /// - `Err(DbErr)` - Database error, including a unique violation on SKU
    pub async fn create(&self, params: CreateInventoryItemParams) -> Result<InventoryItem, DbErr> {
        let now = Utc::now();
        let entity = entity::inventory_item::ActiveModel {
            name: ActiveValue::Set(params.name),
            sku: ActiveValue::Set(params.sku),
            description: ActiveValue::Set(params.description),
            quantity: ActiveValue::Set(params.quantity),
            reorder_threshold: ActiveValue::Set(params.reorder_threshold),
            unit_price_cents: ActiveValue::Set(params.unit_price_cents),
            supplier: ActiveValue::Set(params.supplier),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(InventoryItem::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<InventoryItem>, DbErr> {
        let entity = entity::prelude::InventoryItem::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(InventoryItem::from_entity))
    }

    /// Gets all items ordered by name.
    pub async fn get_all(&self) -> Result<Vec<InventoryItem>, DbErr> {
        let entities = entity::prelude::InventoryItem::find()
            .order_by_asc(entity::inventory_item::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(InventoryItem::from_entity).collect())
    }

    /// Gets items at or below their reorder threshold, ordered by name.
    pub async fn get_low_stock(&self) -> Result<Vec<InventoryItem>, DbErr> {
        let entities = entity::prelude::InventoryItem::find()
            .filter(low_stock_condition())
            .order_by_asc(entity::inventory_item::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(InventoryItem::from_entity).collect())
    }

    /// Counts items at or below their reorder threshold.
    pub async fn count_low_stock(&self) -> Result<u64, DbErr> {
        entity::prelude::InventoryItem::find()
            .filter(low_stock_condition())
            .count(self.db)
            .await
    }

    /// # Returns
    /// - `Ok(Some(InventoryItem))` - Updated item
    /// - `Ok(None)` - No item with that ID
    /// - `Err(DbErr)` - Database error, including a unique violation on SKU
    pub async fn update(
        &self,
        id: i32,
        params: UpdateInventoryItemParams,
    ) -> Result<Option<InventoryItem>, DbErr> {
        let Some(item) = entity::prelude::InventoryItem::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::inventory_item::ActiveModel = item.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(sku) = params.sku {
            active_model.sku = ActiveValue::Set(sku);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(quantity) = params.quantity {
            active_model.quantity = ActiveValue::Set(quantity);
        }
        if let Some(threshold) = params.reorder_threshold {
            active_model.reorder_threshold = ActiveValue::Set(threshold);
        }
        if let Some(price) = params.unit_price_cents {
            active_model.unit_price_cents = ActiveValue::Set(price);
        }
        if let Some(supplier) = params.supplier {
            active_model.supplier = ActiveValue::Set(Some(supplier));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(InventoryItem::from_entity(entity)))
    }

    /// Adds `delta` to an item's quantity in a single `UPDATE`.
    ///
    /// Concurrent adjustments each apply their own delta. Quantity is allowed to go
    /// negative. `before` is the returned row with `delta` taken back off.
    ///
    /// # Returns
    /// - `Ok(Some((before, after)))` - Item state before and after the adjustment
    /// - `Ok(None)` - No item with that ID
    pub async fn adjust_quantity(
        &self,
        id: i32,
        delta: i32,
    ) -> Result<Option<(InventoryItem, InventoryItem)>, DbErr> {
        let updated = entity::prelude::InventoryItem::update_many()
            .filter(entity::inventory_item::Column::Id.eq(id))
            .col_expr(
                entity::inventory_item::Column::Quantity,
                Expr::col(entity::inventory_item::Column::Quantity).add(delta),
            )
            .col_expr(
                entity::inventory_item::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec_with_returning(self.db)
            .await?;

        let Some(entity) = updated.into_iter().next() else {
            return Ok(None);
        };

        let after = InventoryItem::from_entity(entity);
        let before = InventoryItem {
            quantity: after.quantity.saturating_sub(delta),
            ..after.clone()
        };

        Ok(Some((before, after)))
    }

    /// Hard deletes an item.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::InventoryItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn low_stock_condition() -> impl sea_orm::sea_query::IntoCondition {
    Expr::col(entity::inventory_item::Column::Quantity)
        .lte(Expr::col(entity::inventory_item::Column::ReorderThreshold))
}
