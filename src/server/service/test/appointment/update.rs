use super::*;

/// Tests completing an appointment.
///
/// Verifies that entering `completed` records a maintenance entry with the service name
/// and appointment cost, and notifies the client of the status change.
///
/// Expected: Ok with one history entry and one status notification
#[tokio::test]
async fn completion_records_history_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lead = factory::create_shop_lead(db).await?;
    let (client, vehicle, service, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let details = AppointmentService::new(db)
        .update(
            &domain_user(&lead),
            appointment.id,
            UpdateAppointmentParams {
                status: Some("completed".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(details.appointment.status, "completed");

    let history = entity::prelude::MaintenanceHistory::find()
        .filter(entity::maintenance_history::Column::VehicleId.eq(vehicle.id))
        .all(db)
        .await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].description, service.name);
    assert_eq!(history[0].appointment_id, Some(appointment.id));
    assert_eq!(history[0].cost_cents, Some(appointment.total_cost_cents));

    let notifications = entity::prelude::Notification::find()
        .filter(entity::notification::Column::UserId.eq(client.id))
        .all(db)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, KIND_APPOINTMENT_STATUS);

    Ok(())
}

/// Tests rescheduling after a catalog price change.
///
/// Verifies that a new start time recomputes end time and cost from the current
/// service.
///
/// Expected: Ok with the new price and duration applied
#[tokio::test]
async fn reschedule_recomputes_end_and_cost() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, vehicle, service) = factory::helpers::create_booking_dependencies(db).await?;
    let appointment = AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .build()
        .await?;

    let mut active: entity::service::ActiveModel = service.into();
    active.base_price_cents = ActiveValue::Set(9_900);
    active.duration_minutes = ActiveValue::Set(30);
    active.update(db).await?;

    let new_start = appointment.start_time + Duration::days(1);
    let details = AppointmentService::new(db)
        .update(
            &domain_user(&client),
            appointment.id,
            UpdateAppointmentParams {
                start_time: Some(new_start),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(details.appointment.start_time, new_start);
    assert_eq!(details.appointment.end_time, new_start + Duration::minutes(30));
    assert_eq!(details.appointment.total_cost_cents, 9_900);

    Ok(())
}

/// Tests the client status rules.
///
/// Verifies that a client may cancel but not confirm their own appointment.
///
/// Expected: Err(AccessDenied) for confirmed, Ok for cancelled
#[tokio::test]
async fn client_can_only_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let actor = domain_user(&client);
    let service_layer = AppointmentService::new(db);

    let result = service_layer
        .update(
            &actor,
            appointment.id,
            UpdateAppointmentParams {
                status: Some("confirmed".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let details = service_layer
        .update(
            &actor,
            appointment.id,
            UpdateAppointmentParams {
                status: Some("cancelled".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(details.appointment.status, "cancelled");

    Ok(())
}

/// Tests the mechanic edit rules.
///
/// Verifies that an assigned mechanic may change status but not reschedule, and an
/// unassigned mechanic may change nothing.
///
/// Expected: Ok for the status change, Err(AccessDenied) otherwise
#[tokio::test]
async fn mechanic_limited_to_assigned_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mechanic = factory::create_mechanic(db).await?;
    let other_mechanic = factory::create_mechanic(db).await?;
    let (client, vehicle, service) = factory::helpers::create_booking_dependencies(db).await?;
    let appointment = AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .mechanic_id(mechanic.id)
        .build()
        .await?;
    let service_layer = AppointmentService::new(db);

    let details = service_layer
        .update(
            &domain_user(&mechanic),
            appointment.id,
            UpdateAppointmentParams {
                status: Some("in_progress".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(details.appointment.status, "in_progress");

    let reschedule = service_layer
        .update(
            &domain_user(&mechanic),
            appointment.id,
            UpdateAppointmentParams {
                start_time: Some(appointment.start_time + Duration::hours(1)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        reschedule,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let unassigned = service_layer
        .update(
            &domain_user(&other_mechanic),
            appointment.id,
            UpdateAppointmentParams {
                notes: Some("checked".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        unassigned,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests updating an appointment that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lead = factory::create_shop_lead(db).await?;

    let result = AppointmentService::new(db)
        .update(
            &domain_user(&lead),
            999,
            UpdateAppointmentParams {
                notes: Some("n/a".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests clearing the assigned mechanic.
///
/// Verifies that a shop lead can unassign, and the assigned mechanic cannot unassign
/// themselves.
///
/// Expected: Err(AccessDenied) for the mechanic, Ok with no mechanic for the shop lead
#[tokio::test]
async fn shop_lead_unassigns_mechanic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lead = factory::create_shop_lead(db).await?;
    let mechanic = factory::create_mechanic(db).await?;
    let (client, vehicle, service) = factory::helpers::create_booking_dependencies(db).await?;
    let appointment = AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .mechanic_id(mechanic.id)
        .build()
        .await?;
    let service_layer = AppointmentService::new(db);
    let unassign = || UpdateAppointmentParams {
        unassign_mechanic: true,
        ..Default::default()
    };

    let by_mechanic = service_layer
        .update(&domain_user(&mechanic), appointment.id, unassign())
        .await;
    assert!(matches!(
        by_mechanic,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let details = service_layer
        .update(&domain_user(&lead), appointment.id, unassign())
        .await?;
    assert_eq!(details.appointment.mechanic_id, None);
    assert_eq!(details.mechanic_name, None);

    Ok(())
}
