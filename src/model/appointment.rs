use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
    pub service_id: i32,
    pub mechanic_id: Option<i32>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub notes: Option<String>,
    pub total_cost_cents: i64,
    pub client_name: Option<String>,
    /// e.g. `2018 Toyota Corolla (ABC-123)`
    pub vehicle_label: Option<String>,
    pub service_name: Option<String>,
    pub mechanic_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Required: vehicle_id, service_id, start_time.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CreateAppointmentDto {
    pub vehicle_id: Option<i32>,
    pub service_id: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub user_id: Option<i32>,
    pub mechanic_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateAppointmentDto {
    pub start_time: Option<DateTime<Utc>>,
    pub service_id: Option<i32>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub mechanic_id: Option<i32>,
    /// Clears the assigned mechanic. Cannot be combined with `mechanic_id`.
    #[serde(default)]
    pub unassign_mechanic: bool,
}
