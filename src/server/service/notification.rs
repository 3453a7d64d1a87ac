//! In-app notifications and the appointment reminder sweep.

use chrono::{DateTime, Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{
            appointment::AppointmentRepository, notification::NotificationRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            notification::{Notification, KIND_APPOINTMENT_REMINDER},
            user::User,
        },
    },
};

/// How far ahead the reminder sweep looks.
pub const REMINDER_WINDOW_HOURS: i64 = 24;

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The current user's notifications, newest first.
    pub async fn list(&self, actor: &User, unread_only: bool) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_by_user(actor.id, unread_only)
            .await?)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - Missing or addressed to someone else
    pub async fn mark_read(&self, actor: &User, id: i32) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .mark_read(id, actor.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    pub async fn mark_all_read(&self, actor: &User) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(actor.id)
            .await?)
    }

    pub async fn notify_user(
        &self,
        user_id: i32,
        kind: &str,
        message: &str,
    ) -> Result<Notification, AppError> {
        Ok(NotificationRepository::new(self.db)
            .create(user_id, kind, message)
            .await?)
    }

    /// Sends the same notification to every active user with `role`.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of notifications created
    pub async fn notify_role(&self, role: Role, kind: &str, message: &str) -> Result<usize, AppError> {
        let recipients = UserRepository::new(self.db).get_active_by_role(role).await?;
        let repo = NotificationRepository::new(self.db);

        for recipient in &recipients {
            repo.create(recipient.id, kind, message).await?;
        }

        Ok(recipients.len())
    }

    /// Notifies clients of scheduled or confirmed appointments starting within the
    /// reminder window, then flags each appointment so it is reminded only once.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of reminders sent
    pub async fn send_appointment_reminders(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let appointment_repo = AppointmentRepository::new(self.db);
        let due = appointment_repo
            .get_due_reminders(now, now + Duration::hours(REMINDER_WINDOW_HOURS))
            .await?;

        let mut sent = 0;
        for details in due {
            let appointment = &details.appointment;
            let message = format!(
                "Reminder: {} for {} starts at {}",
                details.service_name.as_deref().unwrap_or("your appointment"),
                details.vehicle_label.as_deref().unwrap_or("your vehicle"),
                appointment.start_time.format("%Y-%m-%d %H:%M UTC"),
            );

            self.notify_user(appointment.user_id, KIND_APPOINTMENT_REMINDER, &message)
                .await?;
            appointment_repo.mark_reminder_sent(appointment.id).await?;
            sent += 1;
        }

        if sent > 0 {
            tracing::info!("Sent {} appointment reminders", sent);
        }

        Ok(sent)
    }
}
