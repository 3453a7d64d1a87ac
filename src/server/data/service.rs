//! Service catalog repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::service::{CreateServiceParams, Service, UpdateServiceParams};

pub struct ServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(Service)` - The created active service
    /// - `Err(DbErr)` - Database error, including a unique violation on name
    pub async fn create(&self, params: CreateServiceParams) -> Result<Service, DbErr> {
        let now = Utc::now();
        let entity = entity::service::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            base_price_cents: ActiveValue::Set(params.base_price_cents),
            duration_minutes: ActiveValue::Set(params.duration_minutes),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Service::from_entity(entity))
    }

    pub async fn find_active_by_id(&self, id: i32) -> Result<Option<Service>, DbErr> {
        let entity = entity::prelude::Service::find_by_id(id)
            .filter(entity::service::Column::Active.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(Service::from_entity))
    }

    /// Finds a service regardless of active state, for display on past bookings.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Service>, DbErr> {
        let entity = entity::prelude::Service::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Service::from_entity))
    }

    /// Gets active services ordered by name.
    pub async fn get_active(&self) -> Result<Vec<Service>, DbErr> {
        let entities = entity::prelude::Service::find()
            .filter(entity::service::Column::Active.eq(true))
            .order_by_asc(entity::service::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Service::from_entity).collect())
    }

    /// # Returns
    /// - `Ok(Some(Service))` - Updated service
    /// - `Ok(None)` - Missing or soft-deleted
    pub async fn update(
        &self,
        id: i32,
        params: UpdateServiceParams,
    ) -> Result<Option<Service>, DbErr> {
        let Some(service) = entity::prelude::Service::find_by_id(id)
            .filter(entity::service::Column::Active.eq(true))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::service::ActiveModel = service.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(price) = params.base_price_cents {
            active_model.base_price_cents = ActiveValue::Set(price);
        }
        if let Some(duration) = params.duration_minutes {
            active_model.duration_minutes = ActiveValue::Set(duration);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Service::from_entity(entity)))
    }

    /// Soft deletes a service; existing appointments keep referencing it.
    pub async fn deactivate(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Service::update_many()
            .filter(entity::service::Column::Id.eq(id))
            .filter(entity::service::Column::Active.eq(true))
            .col_expr(entity::service::Column::Active, Expr::value(false))
            .col_expr(entity::service::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
