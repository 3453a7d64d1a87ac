//! Catalog service factory for creating test service rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating catalog services.
pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    base_price_cents: i64,
    duration_minutes: i32,
    active: bool,
}

impl<'a> ServiceFactory<'a> {
    /// Creates a new ServiceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Service {id}"`
    /// - base_price_cents: `5000`
    /// - duration_minutes: `60`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Service {}", id),
            base_price_cents: 5000,
            duration_minutes: 60,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn base_price_cents(mut self, base_price_cents: i64) -> Self {
        self.base_price_cents = base_price_cents;
        self
    }

    pub fn duration_minutes(mut self, duration_minutes: i32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the service row.
    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        let now = Utc::now();
        entity::service::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            base_price_cents: ActiveValue::Set(self.base_price_cents),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active service with default values.
pub async fn create_service(db: &DatabaseConnection) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db).build().await
}
