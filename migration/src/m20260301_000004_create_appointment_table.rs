use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_vehicle_table::Vehicle,
    m20260301_000003_create_service_table::Service,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::UserId))
                    .col(integer(Appointment::VehicleId))
                    .col(integer(Appointment::ServiceId))
                    .col(integer_null(Appointment::MechanicId))
                    .col(timestamp_with_time_zone(Appointment::StartTime))
                    .col(timestamp_with_time_zone(Appointment::EndTime))
                    .col(string(Appointment::Status).default("scheduled"))
                    .col(text_null(Appointment::Notes))
                    .col(big_integer(Appointment::TotalCostCents))
                    .col(boolean(Appointment::ReminderSent).default(false))
                    .col(timestamp_with_time_zone(Appointment::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Appointment::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_user_id")
                            .from(Appointment::Table, Appointment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_mechanic_id")
                            .from(Appointment::Table, Appointment::MechanicId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_vehicle_id")
                            .from(Appointment::Table, Appointment::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service_id")
                            .from(Appointment::Table, Appointment::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_start_time")
                    .table(Appointment::Table)
                    .col(Appointment::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    UserId,
    VehicleId,
    ServiceId,
    MechanicId,
    StartTime,
    EndTime,
    Status,
    Notes,
    TotalCostCents,
    ReminderSent,
    CreatedAt,
    UpdatedAt,
}
