//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records in the
//! database. It handles creation, profile updates, soft deletes, and role queries with
//! conversion between entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::Role,
    server::model::user::{CreateUserParams, UpdateUserParams, User},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active user.
    ///
    /// # Arguments
    /// - `params` - Normalized email, password hash, profile and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            name: ActiveValue::Set(params.name),
            phone: ActiveValue::Set(params.phone),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by ID regardless of active state.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by normalized email regardless of active state.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds an active user with the given role.
    ///
    /// Used to validate client and mechanic references on bookings.
    pub async fn find_active_with_role(&self, id: i32, role: Role) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::Active.eq(true))
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Checks if any active user holds the given role.
    ///
    /// Used during startup to decide whether the bootstrap shop lead must be created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one active user has the role
    /// - `Ok(false)` - Nobody has the role
    /// - `Err(DbErr)` - Database error during count query
    pub async fn role_exists(&self, role: Role) -> Result<bool, DbErr> {
        Ok(self.count_active_by_role(role).await? > 0)
    }

    pub async fn count_active_by_role(&self, role: Role) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Active.eq(true))
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .count(self.db)
            .await
    }

    /// Gets every active user with the given role, ordered by name.
    pub async fn get_active_by_role(&self, role: Role) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Active.eq(true))
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Gets active users with pagination, ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `role` - Only users with this role when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the page and total matching users
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        role: Option<Role>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Active.eq(true));
        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Searches active clients by name or email substring, ordered by name.
    pub async fn search_clients(&self, search: Option<&str>) -> Result<Vec<User>, DbErr> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::Active.eq(true))
            .filter(entity::user::Column::Role.eq(Role::Client.as_str()));

        if let Some(term) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::user::Column::Name.contains(term))
                    .add(entity::user::Column::Email.contains(term)),
            );
        }

        query
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Applies a partial profile update to an active user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No active user with that ID
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::Active.eq(true))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role.as_str().to_string());
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;
        User::from_entity(entity).map(Some)
    }

    /// Soft deletes a user by clearing the active flag.
    ///
    /// # Returns
    /// - `Ok(true)` - User was active and is now deactivated
    /// - `Ok(false)` - No active user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn deactivate(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::Active.eq(true))
            .col_expr(entity::user::Column::Active, Expr::value(false))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
