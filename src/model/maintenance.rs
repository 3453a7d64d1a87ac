use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MaintenanceEntryDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub appointment_id: Option<i32>,
    pub description: String,
    pub mileage: Option<i32>,
    pub cost_cents: Option<i64>,
    pub performed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Required: description. `performed_at` defaults to now.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CreateMaintenanceEntryDto {
    pub description: Option<String>,
    pub mileage: Option<i32>,
    pub cost_cents: Option<i64>,
    pub performed_at: Option<DateTime<Utc>>,
    pub appointment_id: Option<i32>,
}
