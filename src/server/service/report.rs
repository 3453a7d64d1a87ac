//! Dashboard and revenue aggregates for shop leads.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::{BTreeMap, HashMap};

use crate::{
    model::user::Role,
    server::{
        data::{
            appointment::AppointmentRepository, inventory::InventoryRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            appointment::STATUS_COMPLETED,
            report::{Dashboard, RevenueDay, RevenueReport},
        },
    },
};

/// Longest range the revenue report accepts, in days.
pub const MAX_REPORT_DAYS: u64 = 366;

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn day_after(date: NaiveDate) -> Result<NaiveDate, AppError> {
    date.checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::BadRequest(format!("Date {} is out of range", date)))
}

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summary for one UTC day.
    ///
    /// Revenue counts completed appointments that start on `date`; the appointment
    /// count and status breakdown include every status.
    pub async fn dashboard(&self, date: NaiveDate) -> Result<Dashboard, AppError> {
        let appointments = AppointmentRepository::new(self.db)
            .get_starting_between(start_of_day(date), start_of_day(day_after(date)?))
            .await?;

        let mut status_counts: BTreeMap<String, u64> = BTreeMap::new();
        let mut revenue_cents = 0;
        for appointment in &appointments {
            *status_counts.entry(appointment.status.clone()).or_insert(0) += 1;
            if appointment.status == STATUS_COMPLETED {
                revenue_cents += appointment.total_cost_cents;
            }
        }

        let low_stock_count = InventoryRepository::new(self.db).count_low_stock().await?;
        let active_client_count = UserRepository::new(self.db)
            .count_active_by_role(Role::Client)
            .await?;

        Ok(Dashboard {
            date,
            revenue_cents,
            appointment_count: appointments.len() as u64,
            status_counts,
            low_stock_count,
            active_client_count,
        })
    }

    /// Completed-appointment revenue per day over an inclusive date range.
    ///
    /// # Returns
    /// - `Ok(RevenueReport)` - One entry per day, zero-revenue days included
    /// - `Err(AppError::BadRequest)` - `to` before `from`, or more than 366 days
    pub async fn revenue(&self, from: NaiveDate, to: NaiveDate) -> Result<RevenueReport, AppError> {
        if to < from {
            return Err(AppError::BadRequest(
                "'to' must not be before 'from'".to_string(),
            ));
        }

        let day_count = (to - from).num_days() as u64 + 1;
        if day_count > MAX_REPORT_DAYS {
            return Err(AppError::BadRequest(format!(
                "Report range cannot exceed {} days",
                MAX_REPORT_DAYS
            )));
        }

        let appointments = AppointmentRepository::new(self.db)
            .get_starting_between(start_of_day(from), start_of_day(day_after(to)?))
            .await?;

        let mut per_day: HashMap<NaiveDate, (i64, u64)> = HashMap::new();
        for appointment in appointments
            .iter()
            .filter(|a| a.status == STATUS_COMPLETED)
        {
            let entry = per_day
                .entry(appointment.start_time.date_naive())
                .or_insert((0, 0));
            entry.0 += appointment.total_cost_cents;
            entry.1 += 1;
        }

        let days = from
            .iter_days()
            .take(day_count as usize)
            .map(|date| {
                let (revenue_cents, completed_count) =
                    per_day.get(&date).copied().unwrap_or((0, 0));
                RevenueDay {
                    date,
                    revenue_cents,
                    completed_count,
                }
            })
            .collect();

        Ok(RevenueReport { from, to, days })
    }
}
