//! Request and response payloads shared by the HTTP layer.
//!
//! These types define the JSON wire format of the API and are documented through
//! utoipa so they appear in the generated OpenAPI schema.

pub mod api;
pub mod appointment;
pub mod auth;
pub mod client;
pub mod inventory;
pub mod maintenance;
pub mod notification;
pub mod report;
pub mod service;
pub mod user;
pub mod vehicle;
