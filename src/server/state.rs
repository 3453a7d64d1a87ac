//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Identity store used by authentication (database or in-memory fallback)
//! - Token service for issuing and verifying bearer tokens

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{data::user_store::UserStore, service::auth::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn UserStore>` is a reference-counted pointer
/// - `TokenService` holds key material derived once at startup
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Connected lazily, so requests fail with 500 rather than the server refusing to
    /// start when the database is unreachable and the memory user store is in use.
    pub db: DatabaseConnection,

    /// Identity store consulted by sign up, login, and every token check.
    pub user_store: Arc<dyn UserStore>,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `user_store` - Identity store selected during startup
    /// - `tokens` - Token service configured with the signing secret and lifetime
    pub fn new(db: DatabaseConnection, user_store: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self {
            db,
            user_store,
            tokens,
        }
    }
}
