//! User service for business logic.
//!
//! This module provides the `UserService` for shop lead account management. It works
//! with domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{user::UserRepository, user_store::UserStore},
    error::AppError,
    model::user::{GetAllUsersParam, NewAccountParams, PaginatedUsers, UpdateUserParams, User},
    service::auth::create_account,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
    pub store: &'a dyn UserStore,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `store` - Identity store new accounts are written to
    pub fn new(db: &'a DatabaseConnection, store: &'a dyn UserStore) -> Self {
        Self { db, store }
    }

    /// Retrieves active users with pagination.
    ///
    /// Returns a paginated collection of users ordered alphabetically by name.
    /// Calculates total pages based on the per_page parameter and total user count.
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let per_page = param.per_page.max(1);
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(param.role, param.page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    /// Creates an account with any role.
    pub async fn create(&self, account: NewAccountParams) -> Result<User, AppError> {
        create_account(self.store, account).await
    }

    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No active user with that ID
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Soft deletes a user.
    ///
    /// # Returns
    /// - `Ok(())` - User deactivated
    /// - `Err(AppError::BadRequest)` - Shop lead tried to deactivate their own account
    /// - `Err(AppError::NotFound)` - No active user with that ID
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        if actor.id == id {
            return Err(AppError::BadRequest(
                "You cannot deactivate your own account".to_string(),
            ));
        }

        if !UserRepository::new(self.db).deactivate(id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        Ok(())
    }
}
