//! Maintenance history domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::maintenance::{CreateMaintenanceEntryDto, MaintenanceEntryDto},
    server::{error::AppError, util::validation::RequiredFields},
};

/// Work recorded against a vehicle, optionally tied to the appointment that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceEntry {
    pub id: i32,
    pub vehicle_id: i32,
    pub appointment_id: Option<i32>,
    pub description: String,
    pub mileage: Option<i32>,
    pub cost_cents: Option<i64>,
    pub performed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceEntry {
    pub fn into_dto(self) -> MaintenanceEntryDto {
        MaintenanceEntryDto {
            id: self.id,
            vehicle_id: self.vehicle_id,
            appointment_id: self.appointment_id,
            description: self.description,
            mileage: self.mileage,
            cost_cents: self.cost_cents,
            performed_at: self.performed_at,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::maintenance_history::Model) -> Self {
        Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            appointment_id: entity.appointment_id,
            description: entity.description,
            mileage: entity.mileage,
            cost_cents: entity.cost_cents,
            performed_at: entity.performed_at,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMaintenanceEntryParams {
    pub vehicle_id: i32,
    pub appointment_id: Option<i32>,
    pub description: String,
    pub mileage: Option<i32>,
    pub cost_cents: Option<i64>,
    pub performed_at: DateTime<Utc>,
}

impl CreateMaintenanceEntryParams {
    /// # Returns
    /// - `Ok(CreateMaintenanceEntryParams)` - `performed_at` defaults to now
    /// - `Err(AppError::MissingFields)` - description absent
    /// - `Err(AppError::BadRequest)` - Negative mileage or cost
    pub fn from_dto(vehicle_id: i32, dto: CreateMaintenanceEntryDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let description = required.text("description", dto.description);
        required.finish()?;

        if dto.mileage.is_some_and(|m| m < 0) {
            return Err(AppError::BadRequest("Mileage cannot be negative".to_string()));
        }
        if dto.cost_cents.is_some_and(|c| c < 0) {
            return Err(AppError::BadRequest("Cost cannot be negative".to_string()));
        }

        Ok(Self {
            vehicle_id,
            appointment_id: dto.appointment_id,
            description,
            mileage: dto.mileage,
            cost_cents: dto.cost_cents,
            performed_at: dto.performed_at.unwrap_or_else(Utc::now),
        })
    }
}
