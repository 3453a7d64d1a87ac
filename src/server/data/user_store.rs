//! Identity storage used by sign up, login, and token verification.
//!
//! Authentication only needs a handful of user operations, so they sit behind the
//! `UserStore` trait. The server normally uses `DatabaseUserStore`; when the database
//! is unreachable at startup and fallback is enabled, `MemoryUserStore` keeps sign in
//! working for accounts created during that process lifetime.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParams, User},
    },
};

/// Which backing store is serving identity requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStoreKind {
    Database,
    Memory,
}

impl UserStoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStoreKind::Database => "database",
            UserStoreKind::Memory => "memory",
        }
    }
}

/// Identity operations shared by the database and in-memory stores.
///
/// Emails passed in are expected to be normalized already.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr>;

    /// Inserts an active user.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::Conflict)` - Email already taken, including when a concurrent
    ///   create wins after the caller's own lookup
    async fn create(&self, params: CreateUserParams) -> Result<User, AppError>;

    /// Whether any active user holds `role`.
    async fn role_exists(&self, role: Role) -> Result<bool, DbErr>;

    fn kind(&self) -> UserStoreKind;
}

/// `UserStore` backed by the `user` table.
#[derive(Clone)]
pub struct DatabaseUserStore {
    db: DatabaseConnection,
}

impl DatabaseUserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for DatabaseUserStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        UserRepository::new(&self.db).find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        UserRepository::new(&self.db).find_by_email(email).await
    }

    async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        // Unique index violations on email surface as 409 through `AppError::DbErr`.
        Ok(UserRepository::new(&self.db).create(params).await?)
    }

    async fn role_exists(&self, role: Role) -> Result<bool, DbErr> {
        UserRepository::new(&self.db).role_exists(role).await
    }

    fn kind(&self) -> UserStoreKind {
        UserStoreKind::Database
    }
}

/// Process-local `UserStore` used while the database is unavailable.
///
/// Contents are lost on restart.
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
    next_id: AtomicI32,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == params.email) {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            email: params.email,
            password_hash: params.password_hash,
            name: params.name,
            phone: params.phone,
            role: params.role,
            active: true,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn role_exists(&self, role: Role) -> Result<bool, DbErr> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.active && u.role == role))
    }

    fn kind(&self) -> UserStoreKind {
        UserStoreKind::Memory
    }
}
