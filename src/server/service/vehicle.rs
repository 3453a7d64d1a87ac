//! Vehicle registration and maintenance history.
//!
//! Clients manage their own vehicles; mechanics and shop leads can work with any.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        appointment::AppointmentRepository, maintenance::MaintenanceRepository,
        user::UserRepository, vehicle::VehicleRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        maintenance::{CreateMaintenanceEntryParams, MaintenanceEntry},
        user::User,
        vehicle::{CreateVehicleParams, UpdateVehicleParams, Vehicle},
    },
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active vehicles visible to `actor`.
    ///
    /// Clients always get their own vehicles and the owner filter is ignored.
    pub async fn list(&self, actor: &User, owner_id: Option<i32>) -> Result<Vec<Vehicle>, AppError> {
        let owner_id = if actor.role.is_staff() {
            owner_id
        } else {
            Some(actor.id)
        };

        Ok(VehicleRepository::new(self.db).get_active(owner_id).await?)
    }

    /// # Returns
    /// - `Ok(Vehicle)` - Active vehicle owned by `actor`, or any vehicle for staff
    /// - `Err(AppError::NotFound)` - Missing or soft-deleted
    /// - `Err(AuthError::AccessDenied)` - Client asking for someone else's vehicle
    pub async fn get(&self, actor: &User, id: i32) -> Result<Vehicle, AppError> {
        let vehicle = VehicleRepository::new(self.db)
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))?;

        if !actor.role.is_staff() && vehicle.user_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Vehicle {} belongs to another user", id),
            )
            .into());
        }

        Ok(vehicle)
    }

    /// Registers a vehicle.
    ///
    /// # Returns
    /// - `Err(AuthError::AccessDenied)` - Client registering for another user
    /// - `Err(AppError::MissingFields)` - Staff omitted `user_id`
    /// - `Err(AppError::BadRequest)` - `user_id` is not an active user
    /// - `Err(AppError::DbErr)` - Duplicate plate or VIN (409)
    pub async fn create(&self, actor: &User, params: CreateVehicleParams) -> Result<Vehicle, AppError> {
        let owner_id = if actor.role.is_staff() {
            let Some(user_id) = params.user_id else {
                return Err(AppError::MissingFields(vec!["user_id".to_string()]));
            };

            match UserRepository::new(self.db).find_by_id(user_id).await? {
                Some(owner) if owner.active => owner.id,
                _ => {
                    return Err(AppError::BadRequest(format!(
                        "User {} does not exist or is inactive",
                        user_id
                    )))
                }
            }
        } else {
            if params.user_id.is_some_and(|id| id != actor.id) {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    "Clients can only register their own vehicles".to_string(),
                )
                .into());
            }
            actor.id
        };

        Ok(VehicleRepository::new(self.db).create(owner_id, params).await?)
    }

    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: UpdateVehicleParams,
    ) -> Result<Vehicle, AppError> {
        self.get(actor, id).await?;

        VehicleRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
    }

    /// Soft deletes a vehicle after the same access check as `get`.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        self.get(actor, id).await?;
        VehicleRepository::new(self.db).deactivate(id).await?;

        Ok(())
    }

    /// Maintenance history for a vehicle, newest first.
    pub async fn history(&self, actor: &User, id: i32) -> Result<Vec<MaintenanceEntry>, AppError> {
        self.get(actor, id).await?;

        Ok(MaintenanceRepository::new(self.db).get_by_vehicle(id).await?)
    }

    /// Records maintenance performed on a vehicle.
    ///
    /// Raises the vehicle's recorded mileage when the entry reports a higher reading.
    ///
    /// # Returns
    /// - `Ok(MaintenanceEntry)` - Recorded entry
    /// - `Err(AppError::NotFound)` - Vehicle missing or soft-deleted
    /// - `Err(AppError::BadRequest)` - `appointment_id` is not an appointment for this vehicle
    pub async fn add_history(
        &self,
        actor: &User,
        params: CreateMaintenanceEntryParams,
    ) -> Result<MaintenanceEntry, AppError> {
        let vehicle = self.get(actor, params.vehicle_id).await?;

        if let Some(appointment_id) = params.appointment_id {
            let appointment = AppointmentRepository::new(self.db)
                .find_by_id(appointment_id)
                .await?;
            if !appointment.is_some_and(|a| a.vehicle_id == vehicle.id) {
                return Err(AppError::BadRequest(format!(
                    "Appointment {} is not for vehicle {}",
                    appointment_id, vehicle.id
                )));
            }
        }

        let mileage = params.mileage;
        let entry = MaintenanceRepository::new(self.db).create(params).await?;

        if let Some(mileage) = mileage {
            if VehicleRepository::new(self.db)
                .raise_mileage(vehicle.id, mileage)
                .await?
            {
                tracing::debug!("Raised mileage of vehicle {} to {}", vehicle.id, mileage);
            }
        }

        Ok(entry)
    }
}
