use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A bookable catalog service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ServiceDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub base_price_cents: i64,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Required: name, base_price_cents, duration_minutes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CreateServiceDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price_cents: Option<i64>,
    pub duration_minutes: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateServiceDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price_cents: Option<i64>,
    pub duration_minutes: Option<i32>,
}
