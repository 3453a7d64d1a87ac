//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Derived fields such as appointment end time and cost
//! - **Authorization**: Ownership and role checks beyond the route-level guard
//! - **Orchestration**: Coordinating repositories and follow-up notifications
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod appointment;
pub mod auth;
pub mod catalog;
pub mod client;
pub mod inventory;
pub mod notification;
pub mod report;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
