use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        appointment::{CreateAppointmentParams, UpdateAppointmentParams},
        notification::{KIND_APPOINTMENT_BOOKED, KIND_APPOINTMENT_STATUS},
    },
    service::appointment::AppointmentService,
    util::test::domain_user,
};
use test_utils::{builder::TestBuilder, factory, factory::appointment::AppointmentFactory};

mod create;
mod delete;
mod list;
mod update;

fn booking(vehicle_id: i32, service_id: i32) -> CreateAppointmentParams {
    CreateAppointmentParams {
        vehicle_id,
        service_id,
        start_time: Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
        notes: None,
        user_id: None,
        mechanic_id: None,
    }
}
