//! Appointment data repository.
//!
//! List and single-record reads return `AppointmentDetails`, which carry the client,
//! vehicle, service and mechanic display names. Those are fetched in batched lookups
//! rather than one query per appointment.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    appointment::{
        Appointment, AppointmentChanges, AppointmentDetails, AppointmentFilter, STATUS_CONFIRMED,
        STATUS_SCHEDULED,
    },
    vehicle::vehicle_label,
};

pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an appointment with already derived end time and cost.
    ///
    /// # Arguments
    /// - `user_id` - Client the appointment is booked for
    /// - `vehicle_id` - Vehicle owned by that client
    /// - `changes` - Service, schedule, status and cost columns
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The created appointment
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(
        &self,
        user_id: i32,
        vehicle_id: i32,
        changes: AppointmentChanges,
    ) -> Result<Appointment, DbErr> {
        let now = Utc::now();
        let entity = entity::appointment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            service_id: ActiveValue::Set(changes.service_id),
            mechanic_id: ActiveValue::Set(changes.mechanic_id),
            start_time: ActiveValue::Set(changes.start_time),
            end_time: ActiveValue::Set(changes.end_time),
            status: ActiveValue::Set(changes.status),
            notes: ActiveValue::Set(changes.notes),
            total_cost_cents: ActiveValue::Set(changes.total_cost_cents),
            reminder_sent: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Appointment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>, DbErr> {
        let entity = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Appointment::from_entity))
    }

    /// Finds an appointment with its joined display names.
    pub async fn get_details(&self, id: i32) -> Result<Option<AppointmentDetails>, DbErr> {
        let Some(appointment) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.with_details(vec![appointment]).await?.into_iter().next())
    }

    /// Gets appointments matching the filter, ordered by start time.
    ///
    /// `from` is inclusive and `to` exclusive so consecutive calendar ranges don't overlap.
    pub async fn get_filtered(
        &self,
        filter: AppointmentFilter,
    ) -> Result<Vec<AppointmentDetails>, DbErr> {
        let mut query = entity::prelude::Appointment::find();

        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::appointment::Column::UserId.eq(user_id));
        }
        if let Some(mechanic_id) = filter.mechanic_id {
            query = query.filter(entity::appointment::Column::MechanicId.eq(mechanic_id));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::appointment::Column::StartTime.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::appointment::Column::StartTime.lt(to));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::appointment::Column::Status.eq(status));
        }

        let appointments = query
            .order_by_asc(entity::appointment::Column::StartTime)
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Appointment::from_entity)
            .collect();

        self.with_details(appointments).await
    }

    /// Gets appointments starting in `[from, to)` without display names.
    ///
    /// Used by the revenue and dashboard reports.
    pub async fn get_starting_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, DbErr> {
        let entities = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::StartTime.gte(from))
            .filter(entity::appointment::Column::StartTime.lt(to))
            .order_by_asc(entity::appointment::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Appointment::from_entity).collect())
    }

    /// Gets scheduled or confirmed appointments starting in `[from, to)` whose reminder
    /// has not been sent.
    pub async fn get_due_reminders(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<AppointmentDetails>, DbErr> {
        let appointments = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ReminderSent.eq(false))
            .filter(
                entity::appointment::Column::Status.is_in([STATUS_SCHEDULED, STATUS_CONFIRMED]),
            )
            .filter(entity::appointment::Column::StartTime.gte(from))
            .filter(entity::appointment::Column::StartTime.lt(to))
            .order_by_asc(entity::appointment::Column::StartTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(Appointment::from_entity)
            .collect();

        self.with_details(appointments).await
    }

    pub async fn mark_reminder_sent(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Appointment::update_many()
            .filter(entity::appointment::Column::Id.eq(id))
            .col_expr(entity::appointment::Column::ReminderSent, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Writes resolved changes to an appointment.
    ///
    /// A new start time clears `reminder_sent` so the reminder fires for the new slot.
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - Updated appointment
    /// - `Ok(None)` - No appointment with that ID
    pub async fn update(
        &self,
        id: i32,
        changes: AppointmentChanges,
    ) -> Result<Option<Appointment>, DbErr> {
        let Some(appointment) = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let rescheduled = appointment.start_time != changes.start_time;

        let mut active_model: entity::appointment::ActiveModel = appointment.into();
        active_model.service_id = ActiveValue::Set(changes.service_id);
        active_model.mechanic_id = ActiveValue::Set(changes.mechanic_id);
        active_model.start_time = ActiveValue::Set(changes.start_time);
        active_model.end_time = ActiveValue::Set(changes.end_time);
        active_model.status = ActiveValue::Set(changes.status);
        active_model.notes = ActiveValue::Set(changes.notes);
        active_model.total_cost_cents = ActiveValue::Set(changes.total_cost_cents);
        if rescheduled {
            active_model.reminder_sent = ActiveValue::Set(false);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Appointment::from_entity(entity)))
    }

    /// Hard deletes an appointment.
    ///
    /// # Returns
    /// - `Ok(true)` - Appointment deleted
    /// - `Ok(false)` - No appointment with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Appointment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Attaches client, vehicle, service and mechanic display names.
    ///
    /// Names come from inactive rows too, so history stays readable after soft deletes.
    async fn with_details(
        &self,
        appointments: Vec<Appointment>,
    ) -> Result<Vec<AppointmentDetails>, DbErr> {
        if appointments.is_empty() {
            return Ok(Vec::new());
        }

        let mut user_ids: Vec<i32> = appointments.iter().map(|a| a.user_id).collect();
        user_ids.extend(appointments.iter().filter_map(|a| a.mechanic_id));
        user_ids.sort_unstable();
        user_ids.dedup();

        let vehicle_ids: Vec<i32> = appointments.iter().map(|a| a.vehicle_id).collect();
        let service_ids: Vec<i32> = appointments.iter().map(|a| a.service_id).collect();

        let users: HashMap<i32, String> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        let vehicles: HashMap<i32, String> = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Id.is_in(vehicle_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|v| {
                let label = vehicle_label(v.year, &v.make, &v.model, &v.license_plate);
                (v.id, label)
            })
            .collect();

        let services: HashMap<i32, String> = entity::prelude::Service::find()
            .filter(entity::service::Column::Id.is_in(service_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        Ok(appointments
            .into_iter()
            .map(|appointment| AppointmentDetails {
                client_name: users.get(&appointment.user_id).cloned(),
                vehicle_label: vehicles.get(&appointment.vehicle_id).cloned(),
                service_name: services.get(&appointment.service_id).cloned(),
                mechanic_name: appointment
                    .mechanic_id
                    .and_then(|id| users.get(&id).cloned()),
                appointment,
            })
            .collect())
    }
}
