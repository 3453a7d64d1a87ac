//! Vehicle domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
    server::{
        error::AppError,
        util::validation::{optional_text, RequiredFields},
    },
};

/// Vehicle owned by a client.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub user_id: i32,
    /// Owner display name, joined in for list views.
    pub owner_name: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            user_id: self.user_id,
            owner_name: self.owner_name,
            make: self.make,
            model: self.model,
            year: self.year,
            license_plate: self.license_plate,
            vin: self.vin,
            color: self.color,
            mileage: self.mileage,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model at the repository boundary; owner name is left empty.
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            owner_name: None,
            make: entity.make,
            model: entity.model,
            year: entity.year,
            license_plate: entity.license_plate,
            vin: entity.vin,
            color: entity.color,
            mileage: entity.mileage,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn with_owner(entity: entity::vehicle::Model, owner: Option<entity::user::Model>) -> Self {
        let mut vehicle = Self::from_entity(entity);
        vehicle.owner_name = owner.map(|o| o.name);
        vehicle
    }

    /// Display label used in appointment listings, e.g. `2018 Toyota Corolla (ABC-123)`.
    pub fn label(&self) -> String {
        vehicle_label(self.year, &self.make, &self.model, &self.license_plate)
    }
}

pub fn vehicle_label(year: i32, make: &str, model: &str, license_plate: &str) -> String {
    format!("{} {} {} ({})", year, make, model, license_plate)
}

/// Validated input for registering a vehicle.
#[derive(Debug, Clone)]
pub struct CreateVehicleParams {
    /// Owner requested by staff; clients always register for themselves.
    pub user_id: Option<i32>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
}

impl CreateVehicleParams {
    /// # Returns
    /// - `Ok(CreateVehicleParams)` - All required fields present
    /// - `Err(AppError::MissingFields)` - make, model, year or license_plate absent
    pub fn from_dto(dto: CreateVehicleDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let make = required.text("make", dto.make);
        let model = required.text("model", dto.model);
        let year = required.value("year", dto.year);
        let license_plate = required.text("license_plate", dto.license_plate);
        required.finish()?;

        Ok(Self {
            user_id: dto.user_id,
            make,
            model,
            year,
            license_plate: license_plate.to_uppercase(),
            vin: optional_text(dto.vin).map(|v| v.to_uppercase()),
            color: optional_text(dto.color),
            mileage: dto.mileage,
        })
    }
}

/// Partial vehicle update. `None` leaves a column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateVehicleParams {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
}

impl UpdateVehicleParams {
    pub fn from_dto(dto: UpdateVehicleDto) -> Self {
        Self {
            make: optional_text(dto.make),
            model: optional_text(dto.model),
            year: dto.year,
            license_plate: optional_text(dto.license_plate).map(|p| p.to_uppercase()),
            vin: optional_text(dto.vin).map(|v| v.to_uppercase()),
            color: optional_text(dto.color),
            mileage: dto.mileage,
        }
    }
}
