use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub user_id: i32,
    pub owner_name: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Required: make, model, year, license_plate. Staff must also give `user_id`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CreateVehicleDto {
    pub user_id: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateVehicleDto {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
}
