use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryItem::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryItem::Id))
                    .col(string(InventoryItem::Name))
                    .col(string_uniq(InventoryItem::Sku))
                    .col(text_null(InventoryItem::Description))
                    .col(integer(InventoryItem::Quantity).default(0))
                    .col(integer(InventoryItem::ReorderThreshold).default(0))
                    .col(big_integer(InventoryItem::UnitPriceCents).default(0))
                    .col(string_null(InventoryItem::Supplier))
                    .col(timestamp_with_time_zone(InventoryItem::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(InventoryItem::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InventoryItem {
    Table,
    Id,
    Name,
    Sku,
    Description,
    Quantity,
    ReorderThreshold,
    UnitPriceCents,
    Supplier,
    CreatedAt,
    UpdatedAt,
}
