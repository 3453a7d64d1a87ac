use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Shop lead overview for a single UTC day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DashboardDto {
    pub date: NaiveDate,
    /// Sum of completed appointment costs starting that day.
    pub revenue_cents: i64,
    pub appointment_count: u64,
    pub status_counts: BTreeMap<String, u64>,
    pub low_stock_count: u64,
    pub active_client_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct RevenueDayDto {
    pub date: NaiveDate,
    pub revenue_cents: i64,
    pub completed_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct RevenueReportDto {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub total_cents: i64,
    pub days: Vec<RevenueDayDto>,
}
