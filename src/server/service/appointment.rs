//! Appointment booking and lifecycle.
//!
//! Visibility and edit rights depend on the caller's role:
//!
//! | Role      | Sees                         | May change                                  |
//! |-----------|------------------------------|---------------------------------------------|
//! | client    | own appointments             | start time, notes, status to `cancelled`    |
//! | mechanic  | appointments assigned to them| status, notes                               |
//! | shop lead | everything                   | everything                                  |
//!
//! There is no double-booking check; overlapping appointments are accepted.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{
            appointment::AppointmentRepository, maintenance::MaintenanceRepository,
            service::ServiceRepository, user::UserRepository, vehicle::VehicleRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            appointment::{
                compute_end_time, Appointment, AppointmentChanges, AppointmentDetails,
                AppointmentFilter, CreateAppointmentParams, UpdateAppointmentParams,
                STATUS_CANCELLED, STATUS_COMPLETED, STATUS_SCHEDULED,
            },
            maintenance::CreateMaintenanceEntryParams,
            notification::{KIND_APPOINTMENT_BOOKED, KIND_APPOINTMENT_STATUS},
            service::Service,
            user::User,
        },
        service::notification::NotificationService,
        util::validation::optional_text,
    },
};

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists appointments visible to `actor`, ordered by start time.
    ///
    /// # Arguments
    /// - `actor` - Authenticated caller; narrows results by role
    /// - `from` / `to` - Optional `[from, to)` bound on start time
    /// - `status` - Exact status match
    pub async fn list(
        &self,
        actor: &User,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        status: Option<String>,
    ) -> Result<Vec<AppointmentDetails>, AppError> {
        let mut filter = AppointmentFilter {
            from,
            to,
            status: optional_text(status),
            ..Default::default()
        };
        match actor.role {
            Role::Client => filter.user_id = Some(actor.id),
            Role::Mechanic => filter.mechanic_id = Some(actor.id),
            Role::ShopLead => {}
        }

        Ok(AppointmentRepository::new(self.db).get_filtered(filter).await?)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No appointment with that ID
    /// - `Err(AuthError::AccessDenied)` - Not visible to `actor`
    pub async fn get(&self, actor: &User, id: i32) -> Result<AppointmentDetails, AppError> {
        let details = AppointmentRepository::new(self.db)
            .get_details(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;

        if !can_view(actor, &details.appointment) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Appointment {} is not visible to this user", id),
            )
            .into());
        }

        Ok(details)
    }

    /// Books an appointment.
    ///
    /// End time and total cost are derived from the service; status starts as
    /// `scheduled`. Shop leads are notified when a client books.
    ///
    /// # Returns
    /// - `Err(AuthError::AccessDenied)` - Client booking for someone else, or a
    ///   non shop lead assigning a mechanic
    /// - `Err(AppError::BadRequest)` - Vehicle, service, client or mechanic invalid,
    ///   or the vehicle is not owned by the client
    pub async fn create(
        &self,
        actor: &User,
        params: CreateAppointmentParams,
    ) -> Result<AppointmentDetails, AppError> {
        let vehicle = VehicleRepository::new(self.db)
            .find_active_by_id(params.vehicle_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Vehicle {} does not exist or is inactive",
                    params.vehicle_id
                ))
            })?;

        let service = self.active_service(params.service_id).await?;

        let user_id = if actor.role.is_staff() {
            let user_id = params.user_id.unwrap_or(vehicle.user_id);
            match UserRepository::new(self.db).find_by_id(user_id).await? {
                Some(client) if client.active => client.id,
                _ => {
                    return Err(AppError::BadRequest(format!(
                        "User {} does not exist or is inactive",
                        user_id
                    )))
                }
            }
        } else {
            if params.user_id.is_some_and(|id| id != actor.id) {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    "Clients can only book for themselves".to_string(),
                )
                .into());
            }
            actor.id
        };

        if vehicle.user_id != user_id {
            return Err(AppError::BadRequest(format!(
                "Vehicle {} does not belong to user {}",
                vehicle.id, user_id
            )));
        }

        if let Some(mechanic_id) = params.mechanic_id {
            if actor.role != Role::ShopLead {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    "Only shop leads can assign mechanics".to_string(),
                )
                .into());
            }
            self.active_mechanic(mechanic_id).await?;
        }

        let changes = AppointmentChanges {
            service_id: service.id,
            mechanic_id: params.mechanic_id,
            start_time: params.start_time,
            end_time: compute_end_time(params.start_time, service.duration_minutes)?,
            status: STATUS_SCHEDULED.to_string(),
            notes: params.notes,
            total_cost_cents: service.base_price_cents,
        };

        let repo = AppointmentRepository::new(self.db);
        let appointment = repo.create(user_id, vehicle.id, changes).await?;

        if actor.role == Role::Client {
            let message = format!(
                "{} booked {} for {} at {}",
                actor.name,
                service.name,
                vehicle.label(),
                appointment.start_time.format("%Y-%m-%d %H:%M UTC")
            );
            NotificationService::new(self.db)
                .notify_role(Role::ShopLead, KIND_APPOINTMENT_BOOKED, &message)
                .await?;
        }

        tracing::info!("Appointment {} booked by user {}", appointment.id, actor.id);

        self.details(appointment.id).await
    }

    /// Applies changes allowed for the caller's role.
    ///
    /// Changing start time or service recomputes end time and cost from the current
    /// service. Entering `completed` records maintenance history for the vehicle, and
    /// any status change notifies the client.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No appointment with that ID
    /// - `Err(AuthError::AccessDenied)` - Caller may not make one of the changes
    /// - `Err(AppError::BadRequest)` - New service or mechanic is invalid
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: UpdateAppointmentParams,
    ) -> Result<AppointmentDetails, AppError> {
        let repo = AppointmentRepository::new(self.db);
        let current = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;

        check_update_allowed(actor, &current, &params)?;

        let service_changed = params
            .service_id
            .is_some_and(|service_id| service_id != current.service_id);
        let rescheduled = params
            .start_time
            .is_some_and(|start| start != current.start_time);

        let service = if service_changed {
            self.active_service(params.service_id.unwrap_or(current.service_id))
                .await?
        } else {
            self.any_service(current.service_id).await?
        };

        if let Some(mechanic_id) = params.mechanic_id {
            self.active_mechanic(mechanic_id).await?;
        }

        let start_time = params.start_time.unwrap_or(current.start_time);
        let (end_time, total_cost_cents) = if service_changed || rescheduled {
            (
                compute_end_time(start_time, service.duration_minutes)?,
                service.base_price_cents,
            )
        } else {
            (current.end_time, current.total_cost_cents)
        };

        let status = params.status.clone().unwrap_or_else(|| current.status.clone());
        let status_changed = status != current.status;

        let changes = AppointmentChanges {
            service_id: service.id,
            mechanic_id: params.resolve_mechanic(current.mechanic_id),
            start_time,
            end_time,
            status,
            notes: match params.notes {
                Some(notes) => optional_text(Some(notes)),
                None => current.notes.clone(),
            },
            total_cost_cents,
        };

        let updated = repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;

        if status_changed {
            if updated.status == STATUS_COMPLETED {
                MaintenanceRepository::new(self.db)
                    .create(CreateMaintenanceEntryParams {
                        vehicle_id: updated.vehicle_id,
                        appointment_id: Some(updated.id),
                        description: service.name.clone(),
                        mileage: None,
                        cost_cents: Some(updated.total_cost_cents),
                        performed_at: Utc::now(),
                    })
                    .await?;
            }

            let message = format!(
                "Your {} appointment on {} is now {}",
                service.name,
                updated.start_time.format("%Y-%m-%d %H:%M UTC"),
                updated.status
            );
            NotificationService::new(self.db)
                .notify_user(updated.user_id, KIND_APPOINTMENT_STATUS, &message)
                .await?;

            tracing::info!(
                "Appointment {} status {} -> {} by user {}",
                id,
                current.status,
                updated.status,
                actor.id
            );
        }

        self.details(updated.id).await
    }

    /// Hard deletes an appointment; allowed for its client and shop leads.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let repo = AppointmentRepository::new(self.db);
        let appointment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;

        if actor.role != Role::ShopLead && appointment.user_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Cannot delete appointment {}", id),
            )
            .into());
        }

        repo.delete(id).await?;

        Ok(())
    }

    async fn details(&self, id: i32) -> Result<AppointmentDetails, AppError> {
        AppointmentRepository::new(self.db)
            .get_details(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    async fn active_service(&self, id: i32) -> Result<Service, AppError> {
        ServiceRepository::new(self.db)
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Service {} does not exist or is inactive", id))
            })
    }

    /// Current service of an existing booking, even if since removed from the catalog.
    async fn any_service(&self, id: i32) -> Result<Service, AppError> {
        ServiceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Service {} missing", id)))
    }

    async fn active_mechanic(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_active_with_role(id, Role::Mechanic)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("User {} is not an active mechanic", id)))
    }
}

fn can_view(actor: &User, appointment: &Appointment) -> bool {
    match actor.role {
        Role::ShopLead => true,
        Role::Mechanic => appointment.mechanic_id == Some(actor.id),
        Role::Client => appointment.user_id == actor.id,
    }
}

fn check_update_allowed(
    actor: &User,
    appointment: &Appointment,
    params: &UpdateAppointmentParams,
) -> Result<(), AppError> {
    let denied = |reason: &str| -> AppError {
        AuthError::AccessDenied(
            actor.id,
            format!("Appointment {}: {}", appointment.id, reason),
        )
        .into()
    };

    match actor.role {
        Role::ShopLead => Ok(()),
        Role::Client => {
            if appointment.user_id != actor.id {
                return Err(denied("not the owner"));
            }
            if params.service_id.is_some() || params.changes_mechanic() {
                return Err(denied("clients cannot change service or mechanic"));
            }
            if params
                .status
                .as_deref()
                .is_some_and(|status| status != STATUS_CANCELLED)
            {
                return Err(denied("clients can only cancel"));
            }
            Ok(())
        }
        Role::Mechanic => {
            if appointment.mechanic_id != Some(actor.id) {
                return Err(denied("not assigned to this mechanic"));
            }
            if params.start_time.is_some()
                || params.service_id.is_some()
                || params.changes_mechanic()
            {
                return Err(denied("mechanics can only change status and notes"));
            }
            Ok(())
        }
    }
}
