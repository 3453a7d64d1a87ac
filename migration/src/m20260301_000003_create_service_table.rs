use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(pk_auto(Service::Id))
                    .col(string_uniq(Service::Name))
                    .col(text_null(Service::Description))
                    .col(big_integer(Service::BasePriceCents))
                    .col(integer(Service::DurationMinutes))
                    .col(boolean(Service::Active).default(true))
                    .col(timestamp_with_time_zone(Service::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Service::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Service {
    Table,
    Id,
    Name,
    Description,
    BasePriceCents,
    DurationMinutes,
    Active,
    CreatedAt,
    UpdatedAt,
}
