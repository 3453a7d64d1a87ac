//! Appointment factory for creating test appointment rows.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating appointments.
///
/// End time and cost are derived from the service passed in, the same way the
/// booking service derives them.
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    vehicle_id: i32,
    service_id: i32,
    duration_minutes: i32,
    base_price_cents: i64,
    mechanic_id: Option<i32>,
    start_time: DateTime<Utc>,
    status: String,
    reminder_sent: bool,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory.
    ///
    /// Defaults:
    /// - start_time: two days from now
    /// - status: `"scheduled"`
    /// - mechanic: none
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: i32,
        vehicle_id: i32,
        service: &entity::service::Model,
    ) -> Self {
        Self {
            db,
            user_id,
            vehicle_id,
            service_id: service.id,
            duration_minutes: service.duration_minutes,
            base_price_cents: service.base_price_cents,
            mechanic_id: None,
            start_time: Utc::now() + Duration::days(2),
            status: "scheduled".to_string(),
            reminder_sent: false,
        }
    }

    pub fn mechanic_id(mut self, mechanic_id: i32) -> Self {
        self.mechanic_id = Some(mechanic_id);
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn reminder_sent(mut self, reminder_sent: bool) -> Self {
        self.reminder_sent = reminder_sent;
        self
    }

    /// Builds and inserts the appointment row.
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        let now = Utc::now();
        entity::appointment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            service_id: ActiveValue::Set(self.service_id),
            mechanic_id: ActiveValue::Set(self.mechanic_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(
                self.start_time + Duration::minutes(self.duration_minutes as i64),
            ),
            status: ActiveValue::Set(self.status),
            notes: ActiveValue::Set(None),
            total_cost_cents: ActiveValue::Set(self.base_price_cents),
            reminder_sent: ActiveValue::Set(self.reminder_sent),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled appointment two days from now.
pub async fn create_appointment(
    db: &DatabaseConnection,
    user_id: i32,
    vehicle_id: i32,
    service: &entity::service::Model,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, user_id, vehicle_id, service)
        .build()
        .await
}
