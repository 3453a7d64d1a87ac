//! Maintenance history repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::maintenance::{CreateMaintenanceEntryParams, MaintenanceEntry};

pub struct MaintenanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(MaintenanceEntry)` - The recorded entry
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an
    ///   unknown appointment
    pub async fn create(
        &self,
        params: CreateMaintenanceEntryParams,
    ) -> Result<MaintenanceEntry, DbErr> {
        let entity = entity::maintenance_history::ActiveModel {
            vehicle_id: ActiveValue::Set(params.vehicle_id),
            appointment_id: ActiveValue::Set(params.appointment_id),
            description: ActiveValue::Set(params.description),
            mileage: ActiveValue::Set(params.mileage),
            cost_cents: ActiveValue::Set(params.cost_cents),
            performed_at: ActiveValue::Set(params.performed_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MaintenanceEntry::from_entity(entity))
    }

    /// Gets a vehicle's history, newest first.
    pub async fn get_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<MaintenanceEntry>, DbErr> {
        let entities = entity::prelude::MaintenanceHistory::find()
            .filter(entity::maintenance_history::Column::VehicleId.eq(vehicle_id))
            .order_by_desc(entity::maintenance_history::Column::PerformedAt)
            .order_by_desc(entity::maintenance_history::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MaintenanceEntry::from_entity)
            .collect())
    }
}
