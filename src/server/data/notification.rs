//! Notification data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::Notification;

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an unread notification for one user.
    pub async fn create(
        &self,
        user_id: i32,
        kind: &str,
        message: &str,
    ) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(kind.to_string()),
            message: ActiveValue::Set(message.to_string()),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets a user's notifications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Recipient
    /// - `unread_only` - Skip notifications already marked read
    pub async fn get_by_user(
        &self,
        user_id: i32,
        unread_only: bool,
    ) -> Result<Vec<Notification>, DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));
        if unread_only {
            query = query.filter(entity::notification::Column::Read.eq(false));
        }

        let entities = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    /// Marks one notification read if it belongs to `user_id`.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - Notification now marked read
    /// - `Ok(None)` - Missing or owned by someone else
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(notification) = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::notification::ActiveModel = notification.into();
        active_model.read = ActiveValue::Set(true);
        let entity = active_model.update(self.db).await?;

        Ok(Some(Notification::from_entity(entity)))
    }

    /// Marks every unread notification of a user read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications changed
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
