use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_vehicle_table::Vehicle,
    m20260301_000004_create_appointment_table::Appointment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceHistory::Id))
                    .col(integer(MaintenanceHistory::VehicleId))
                    .col(integer_null(MaintenanceHistory::AppointmentId))
                    .col(text(MaintenanceHistory::Description))
                    .col(integer_null(MaintenanceHistory::Mileage))
                    .col(big_integer_null(MaintenanceHistory::CostCents))
                    .col(timestamp_with_time_zone(MaintenanceHistory::PerformedAt))
                    .col(
                        timestamp_with_time_zone(MaintenanceHistory::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_history_vehicle_id")
                            .from(MaintenanceHistory::Table, MaintenanceHistory::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_history_appointment_id")
                            .from(MaintenanceHistory::Table, MaintenanceHistory::AppointmentId)
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceHistory {
    Table,
    Id,
    VehicleId,
    AppointmentId,
    Description,
    Mileage,
    CostCents,
    PerformedAt,
    CreatedAt,
}
