use crate::server::{
    data::appointment::AppointmentRepository,
    model::appointment::{AppointmentChanges, AppointmentFilter, Appointment},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::appointment::AppointmentFactory};

mod get_due_reminders;
mod get_filtered;
mod update;

fn changes_from(appointment: &Appointment) -> AppointmentChanges {
    AppointmentChanges {
        service_id: appointment.service_id,
        mechanic_id: appointment.mechanic_id,
        start_time: appointment.start_time,
        end_time: appointment.end_time,
        status: appointment.status.clone(),
        notes: appointment.notes.clone(),
        total_cost_cents: appointment.total_cost_cents,
    }
}
