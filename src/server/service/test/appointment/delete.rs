use super::*;

/// Tests deletion rights.
///
/// Verifies that another client cannot delete an appointment and its owner can.
///
/// Expected: Err(AccessDenied), then Ok(()) and the row is gone
#[tokio::test]
async fn owner_deletes_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    let service_layer = AppointmentService::new(db);

    let result = service_layer
        .delete(&domain_user(&other), appointment.id)
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service_layer
        .delete(&domain_user(&client), appointment.id)
        .await?;

    let remaining = entity::prelude::Appointment::find_by_id(appointment.id)
        .one(db)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}
