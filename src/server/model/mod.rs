//! Domain models and operation-specific parameter types.
//!
//! Domain models are what repositories return and services work with. They are
//! converted from SeaORM entities at the repository boundary (`from_entity`) and into
//! API DTOs at the controller boundary (`into_dto`). Parameter types carry validated
//! input from controllers into services.

pub mod appointment;
pub mod inventory;
pub mod maintenance;
pub mod notification;
pub mod report;
pub mod service;
pub mod user;
pub mod vehicle;
