use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::vehicle::VehicleDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ClientSummaryDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Number of active vehicles on file.
    pub vehicle_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ClientDetailDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub vehicles: Vec<VehicleDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateClientDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
