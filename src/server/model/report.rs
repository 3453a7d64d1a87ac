//! Aggregate report models for the shop lead dashboard.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::model::report::{DashboardDto, RevenueDayDto, RevenueReportDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub date: NaiveDate,
    pub revenue_cents: i64,
    pub appointment_count: u64,
    pub status_counts: BTreeMap<String, u64>,
    pub low_stock_count: u64,
    pub active_client_count: u64,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            date: self.date,
            revenue_cents: self.revenue_cents,
            appointment_count: self.appointment_count,
            status_counts: self.status_counts,
            low_stock_count: self.low_stock_count,
            active_client_count: self.active_client_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueDay {
    pub date: NaiveDate,
    pub revenue_cents: i64,
    pub completed_count: u64,
}

/// Daily revenue over an inclusive date range, zero days included.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days: Vec<RevenueDay>,
}

impl RevenueReport {
    pub fn total_cents(&self) -> i64 {
        self.days.iter().map(|d| d.revenue_cents).sum()
    }

    pub fn into_dto(self) -> RevenueReportDto {
        let total_cents = self.total_cents();
        RevenueReportDto {
            from: self.from,
            to: self.to,
            total_cents,
            days: self
                .days
                .into_iter()
                .map(|d| RevenueDayDto {
                    date: d.date,
                    revenue_cents: d.revenue_cents,
                    completed_count: d.completed_count,
                })
                .collect(),
        }
    }
}
