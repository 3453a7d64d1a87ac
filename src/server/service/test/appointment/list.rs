use super::*;

/// Tests role-based appointment visibility.
///
/// Verifies that clients see their own appointments, mechanics see only those assigned
/// to them, and shop leads see all.
///
/// Expected: Ok with 1, 1 and 2 appointments respectively
#[tokio::test]
async fn narrows_results_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lead = factory::create_shop_lead(db).await?;
    let mechanic = factory::create_mechanic(db).await?;
    let (client, vehicle, service) = factory::helpers::create_booking_dependencies(db).await?;
    let (other, other_vehicle, _) = factory::helpers::create_booking_dependencies(db).await?;

    let own = AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .build()
        .await?;
    let assigned = AppointmentFactory::new(db, other.id, other_vehicle.id, &service)
        .mechanic_id(mechanic.id)
        .build()
        .await?;

    let service_layer = AppointmentService::new(db);

    let for_client = service_layer
        .list(&domain_user(&client), None, None, None)
        .await?;
    assert_eq!(for_client.len(), 1);
    assert_eq!(for_client[0].appointment.id, own.id);

    let for_mechanic = service_layer
        .list(&domain_user(&mechanic), None, None, None)
        .await?;
    assert_eq!(for_mechanic.len(), 1);
    assert_eq!(for_mechanic[0].appointment.id, assigned.id);

    let for_lead = service_layer
        .list(&domain_user(&lead), None, None, None)
        .await?;
    assert_eq!(for_lead.len(), 2);

    Ok(())
}

/// Tests reading another client's appointment.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn get_denies_other_client() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let result = AppointmentService::new(db)
        .get(&domain_user(&other), appointment.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
