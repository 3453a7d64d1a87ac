use super::*;

/// Tests a client booking their own vehicle.
///
/// Verifies that end time and cost come from the service, status starts as scheduled,
/// and active shop leads are notified.
///
/// Expected: Ok(AppointmentDetails) ending 90 minutes after the start
#[tokio::test]
async fn client_books_own_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lead = factory::create_shop_lead(db).await?;
    let client = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db, client.id).await?;
    let service = factory::service::ServiceFactory::new(db)
        .base_price_cents(12_000)
        .duration_minutes(90)
        .build()
        .await?;

    let details = AppointmentService::new(db)
        .create(&domain_user(&client), booking(vehicle.id, service.id))
        .await?;

    let appointment = details.appointment;
    assert_eq!(appointment.user_id, client.id);
    assert_eq!(appointment.status, "scheduled");
    assert_eq!(appointment.total_cost_cents, 12_000);
    assert_eq!(
        appointment.end_time,
        appointment.start_time + Duration::minutes(90)
    );
    assert_eq!(details.service_name.as_deref(), Some(service.name.as_str()));

    let notifications = entity::prelude::Notification::find()
        .filter(entity::notification::Column::UserId.eq(lead.id))
        .all(db)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, KIND_APPOINTMENT_BOOKED);

    Ok(())
}

/// Tests a client booking a vehicle they don't own.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_vehicle_of_other_client() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, vehicle, service) = factory::helpers::create_booking_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let result = AppointmentService::new(db)
        .create(&domain_user(&other), booking(vehicle.id, service.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a client trying to assign a mechanic.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn client_cannot_assign_mechanic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, vehicle, service) = factory::helpers::create_booking_dependencies(db).await?;
    let mechanic = factory::create_mechanic(db).await?;

    let mut params = booking(vehicle.id, service.id);
    params.mechanic_id = Some(mechanic.id);

    let result = AppointmentService::new(db)
        .create(&domain_user(&client), params)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a shop lead booking on behalf of a client.
///
/// Verifies that the client defaults to the vehicle owner, the mechanic is assigned,
/// and no booking notification is sent for staff bookings.
///
/// Expected: Ok(AppointmentDetails) for the vehicle owner
#[tokio::test]
async fn shop_lead_books_for_vehicle_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lead = factory::create_shop_lead(db).await?;
    let mechanic = factory::create_mechanic(db).await?;
    let (client, vehicle, service) = factory::helpers::create_booking_dependencies(db).await?;

    let mut params = booking(vehicle.id, service.id);
    params.mechanic_id = Some(mechanic.id);

    let details = AppointmentService::new(db)
        .create(&domain_user(&lead), params)
        .await?;

    assert_eq!(details.appointment.user_id, client.id);
    assert_eq!(details.appointment.mechanic_id, Some(mechanic.id));

    let notifications = entity::prelude::Notification::find().all(db).await?;
    assert!(notifications.is_empty());

    Ok(())
}

/// Tests booking a soft-deleted service.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_inactive_service() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db, client.id).await?;
    let service = factory::service::ServiceFactory::new(db)
        .active(false)
        .build()
        .await?;

    let result = AppointmentService::new(db)
        .create(&domain_user(&client), booking(vehicle.id, service.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests assigning a user who is not a mechanic.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_non_mechanic_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lead = factory::create_shop_lead(db).await?;
    let (client, vehicle, service) = factory::helpers::create_booking_dependencies(db).await?;

    let mut params = booking(vehicle.id, service.id);
    params.mechanic_id = Some(client.id);

    let result = AppointmentService::new(db)
        .create(&domain_user(&lead), params)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests booking a start time so late that the end time cannot be represented.
///
/// Expected: Err(AppError::BadRequest) and nothing stored
#[tokio::test]
async fn rejects_start_time_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, vehicle, service) = factory::helpers::create_booking_dependencies(db).await?;
    let mut params = booking(vehicle.id, service.id);
    params.start_time = chrono::DateTime::<Utc>::MAX_UTC - Duration::minutes(30);

    let result = AppointmentService::new(db)
        .create(&domain_user(&client), params)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::Appointment::find().all(db).await?.is_empty());

    Ok(())
}
