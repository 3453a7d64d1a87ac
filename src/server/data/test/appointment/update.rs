use super::*;

/// Tests that rescheduling clears the reminder flag.
///
/// Verifies that a new start time makes the appointment eligible for another reminder.
///
/// Expected: Ok(Some(Appointment)) with reminder_sent=false
#[tokio::test]
async fn reschedule_resets_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, vehicle, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    let entity = AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .reminder_sent(true)
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let current = repo.find_by_id(entity.id).await?.unwrap();

    let mut changes = changes_from(&current);
    changes.start_time = current.start_time + Duration::days(1);
    changes.end_time = current.end_time + Duration::days(1);

    let updated = repo.update(entity.id, changes).await?.unwrap();

    assert_eq!(updated.start_time, current.start_time + Duration::days(1));
    assert!(!updated.reminder_sent);

    Ok(())
}

/// Tests that other changes keep the reminder flag.
///
/// Expected: Ok(Some(Appointment)) with reminder_sent=true and new status
#[tokio::test]
async fn status_change_keeps_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, vehicle, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    let entity = AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .reminder_sent(true)
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let current = repo.find_by_id(entity.id).await?.unwrap();

    let mut changes = changes_from(&current);
    changes.status = "confirmed".to_string();

    let updated = repo.update(entity.id, changes).await?.unwrap();

    assert_eq!(updated.status, "confirmed");
    assert!(updated.reminder_sent);

    Ok(())
}

/// Tests updating a missing appointment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, entity) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = AppointmentRepository::new(db);
    let current = repo.find_by_id(entity.id).await?.unwrap();
    let result = repo.update(entity.id + 100, changes_from(&current)).await?;

    assert!(result.is_none());

    Ok(())
}
