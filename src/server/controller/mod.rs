//! HTTP handlers, one module per resource.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs into server params, call a
//! service, and convert the returned domain model back into a DTO.

pub mod appointment;
pub mod auth;
pub mod client;
pub mod health;
pub mod inventory;
pub mod notification;
pub mod report;
pub mod service;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
