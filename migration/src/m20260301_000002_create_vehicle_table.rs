use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(integer(Vehicle::UserId))
                    .col(string(Vehicle::Make))
                    .col(string(Vehicle::Model))
                    .col(integer(Vehicle::Year))
                    .col(string_uniq(Vehicle::LicensePlate))
                    .col(string_null(Vehicle::Vin).unique_key())
                    .col(string_null(Vehicle::Color))
                    .col(integer_null(Vehicle::Mileage))
                    .col(boolean(Vehicle::Active).default(true))
                    .col(timestamp_with_time_zone(Vehicle::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Vehicle::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_user_id")
                            .from(Vehicle::Table, Vehicle::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_user_id")
                    .table(Vehicle::Table)
                    .col(Vehicle::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    UserId,
    Make,
    Model,
    Year,
    LicensePlate,
    Vin,
    Color,
    Mileage,
    Active,
    CreatedAt,
    UpdatedAt,
}
