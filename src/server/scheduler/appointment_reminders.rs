use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::notification::NotificationService};

/// Every five minutes, at second zero.
const REMINDER_SCHEDULE: &str = "0 */5 * * * *";

/// Starts the appointment reminder scheduler.
///
/// Each run notifies clients of scheduled or confirmed appointments starting within the
/// next 24 hours. Appointments are flagged once reminded, so overlapping runs don't
/// repeat a reminder.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(REMINDER_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = NotificationService::new(&db)
                .send_appointment_reminders(Utc::now())
                .await
            {
                tracing::error!("Error sending appointment reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Appointment reminder scheduler started");

    Ok(scheduler)
}
