//! Vehicle factory for creating test vehicle rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles owned by a given user.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    make: String,
    model: String,
    year: i32,
    license_plate: String,
    vin: Option<String>,
    mileage: Option<i32>,
    active: bool,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - make/model: `"Toyota"` / `"Corolla"`
    /// - year: `2018`
    /// - license_plate: `"TEST-{id}"`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2018,
            license_plate: format!("TEST-{}", id),
            vin: None,
            mileage: None,
            active: true,
        }
    }

    pub fn make(mut self, make: impl Into<String>) -> Self {
        self.make = make.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn license_plate(mut self, license_plate: impl Into<String>) -> Self {
        self.license_plate = license_plate.into();
        self
    }

    pub fn vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = Some(vin.into());
        self
    }

    pub fn mileage(mut self, mileage: i32) -> Self {
        self.mileage = Some(mileage);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the vehicle row.
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now();
        entity::vehicle::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            make: ActiveValue::Set(self.make),
            model: ActiveValue::Set(self.model),
            year: ActiveValue::Set(self.year),
            license_plate: ActiveValue::Set(self.license_plate),
            vin: ActiveValue::Set(self.vin),
            color: ActiveValue::Set(None),
            mileage: ActiveValue::Set(self.mileage),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active vehicle with default values for the given owner.
pub async fn create_vehicle(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db, user_id).build().await
}
