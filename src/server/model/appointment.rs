//! Appointment domain models and parameters.

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::appointment::{AppointmentDto, CreateAppointmentDto, UpdateAppointmentDto},
    server::{
        error::AppError,
        util::validation::{optional_text, RequiredFields},
    },
};

/// Status given to new appointments.
pub const STATUS_SCHEDULED: &str = "scheduled";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
/// Entering this status records maintenance history and counts toward revenue.
pub const STATUS_COMPLETED: &str = "completed";
/// The only status a client may set on their own appointment.
pub const STATUS_CANCELLED: &str = "cancelled";

/// End of a booking given its start and the service's estimated duration.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Start plus duration
/// - `Err(AppError::BadRequest)` - The end would fall outside the representable range
pub fn compute_end_time(
    start_time: DateTime<Utc>,
    duration_minutes: i32,
) -> Result<DateTime<Utc>, AppError> {
    start_time
        .checked_add_signed(Duration::minutes(i64::from(duration_minutes)))
        .ok_or_else(|| AppError::BadRequest("Start time out of range".to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
    pub service_id: i32,
    pub mechanic_id: Option<i32>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Free-form; see the `STATUS_*` constants for values with extra meaning.
    pub status: String,
    pub notes: Option<String>,
    pub total_cost_cents: i64,
    pub reminder_sent: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    pub fn from_entity(entity: entity::appointment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            vehicle_id: entity.vehicle_id,
            service_id: entity.service_id,
            mechanic_id: entity.mechanic_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            status: entity.status,
            notes: entity.notes,
            total_cost_cents: entity.total_cost_cents,
            reminder_sent: entity.reminder_sent,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Appointment with the joined display names used by list and calendar views.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDetails {
    pub appointment: Appointment,
    pub client_name: Option<String>,
    pub vehicle_label: Option<String>,
    pub service_name: Option<String>,
    pub mechanic_name: Option<String>,
}

impl AppointmentDetails {
    pub fn into_dto(self) -> AppointmentDto {
        let a = self.appointment;
        AppointmentDto {
            id: a.id,
            user_id: a.user_id,
            vehicle_id: a.vehicle_id,
            service_id: a.service_id,
            mechanic_id: a.mechanic_id,
            start_time: a.start_time,
            end_time: a.end_time,
            status: a.status,
            notes: a.notes,
            total_cost_cents: a.total_cost_cents,
            client_name: self.client_name,
            vehicle_label: self.vehicle_label,
            service_name: self.service_name,
            mechanic_name: self.mechanic_name,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Visibility and range filter for appointment listings.
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    /// Only appointments booked by this client.
    pub user_id: Option<i32>,
    /// Only appointments assigned to this mechanic.
    pub mechanic_id: Option<i32>,
    /// Inclusive lower bound on `start_time`.
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `start_time`.
    pub to: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

/// Validated booking request, before ownership checks.
#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub vehicle_id: i32,
    pub service_id: i32,
    pub start_time: DateTime<Utc>,
    pub notes: Option<String>,
    pub user_id: Option<i32>,
    pub mechanic_id: Option<i32>,
}

impl CreateAppointmentParams {
    /// # Returns
    /// - `Err(AppError::MissingFields)` - vehicle_id, service_id or start_time absent
    pub fn from_dto(dto: CreateAppointmentDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let vehicle_id = required.value("vehicle_id", dto.vehicle_id);
        let service_id = required.value("service_id", dto.service_id);
        let start_time = required.value("start_time", dto.start_time);
        required.finish()?;

        Ok(Self {
            vehicle_id,
            service_id,
            start_time,
            notes: optional_text(dto.notes),
            user_id: dto.user_id,
            mechanic_id: dto.mechanic_id,
        })
    }
}

/// Requested appointment changes. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateAppointmentParams {
    pub start_time: Option<DateTime<Utc>>,
    pub service_id: Option<i32>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub mechanic_id: Option<i32>,
    /// Clear the assigned mechanic; never set together with `mechanic_id`.
    pub unassign_mechanic: bool,
}

impl UpdateAppointmentParams {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Status given but blank, or a mechanic both
    ///   assigned and unassigned
    pub fn from_dto(dto: UpdateAppointmentDto) -> Result<Self, AppError> {
        if dto.unassign_mechanic && dto.mechanic_id.is_some() {
            return Err(AppError::BadRequest(
                "Cannot both assign and unassign a mechanic".to_string(),
            ));
        }

        let status = match dto.status {
            Some(status) => match optional_text(Some(status)) {
                Some(status) => Some(status),
                None => return Err(AppError::BadRequest("Status cannot be empty".to_string())),
            },
            None => None,
        };

        Ok(Self {
            start_time: dto.start_time,
            service_id: dto.service_id,
            notes: dto.notes,
            status,
            mechanic_id: dto.mechanic_id,
            unassign_mechanic: dto.unassign_mechanic,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.start_time.is_none()
            && self.service_id.is_none()
            && self.notes.is_none()
            && self.status.is_none()
            && self.mechanic_id.is_none()
            && !self.unassign_mechanic
    }

    /// Mechanic to store given the currently assigned one.
    pub fn resolve_mechanic(&self, current: Option<i32>) -> Option<i32> {
        if self.unassign_mechanic {
            None
        } else {
            self.mechanic_id.or(current)
        }
    }

    pub fn changes_mechanic(&self) -> bool {
        self.mechanic_id.is_some() || self.unassign_mechanic
    }
}

/// Resolved column values written by the appointment repository.
#[derive(Debug, Clone)]
pub struct AppointmentChanges {
    pub service_id: i32,
    pub mechanic_id: Option<i32>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub notes: Option<String>,
    pub total_cost_cents: i64,
}
