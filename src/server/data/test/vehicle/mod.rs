use crate::server::{data::vehicle::VehicleRepository, model::vehicle::CreateVehicleParams};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod count_active_by_owners;
mod create;
mod get_active;
mod raise_mileage;

fn create_params(license_plate: &str) -> CreateVehicleParams {
    CreateVehicleParams {
        user_id: None,
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2019,
        license_plate: license_plate.to_string(),
        vin: None,
        color: Some("Blue".to_string()),
        mileage: Some(42_000),
    }
}
