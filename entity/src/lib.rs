//! SeaORM entity definitions for the workshop schema.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude`
//! re-exports the entity types under their table names for concise queries.

pub mod prelude;

pub mod appointment;
pub mod inventory_item;
pub mod maintenance_history;
pub mod notification;
pub mod service;
pub mod user;
pub mod vehicle;
