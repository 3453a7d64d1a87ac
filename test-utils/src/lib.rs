//! Workshop Test Utils
//!
//! Provides shared testing utilities for building unit tests for the workshop backend.
//! This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for inserting rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for every workshop table
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_appointment() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_workshop_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (client, vehicle, service) = factory::helpers::create_booking_dependencies(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
