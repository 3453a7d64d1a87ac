//! Service catalog management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::service::ServiceRepository,
    error::AppError,
    model::service::{CreateServiceParams, Service, UpdateServiceParams},
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Service>, AppError> {
        Ok(ServiceRepository::new(self.db).get_active().await?)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - Missing or soft-deleted
    pub async fn get(&self, id: i32) -> Result<Service, AppError> {
        ServiceRepository::new(self.db)
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }

    /// Duplicate names surface as a unique violation (409).
    pub async fn create(&self, params: CreateServiceParams) -> Result<Service, AppError> {
        Ok(ServiceRepository::new(self.db).create(params).await?)
    }

    /// Price and duration changes only affect bookings made or rescheduled afterwards.
    pub async fn update(&self, id: i32, params: UpdateServiceParams) -> Result<Service, AppError> {
        ServiceRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ServiceRepository::new(self.db).deactivate(id).await? {
            return Err(AppError::NotFound(format!("Service {} not found", id)));
        }

        Ok(())
    }
}
