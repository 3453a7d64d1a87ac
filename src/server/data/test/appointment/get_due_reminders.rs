use super::*;

/// Tests selecting appointments that need a reminder.
///
/// Verifies that only scheduled or confirmed appointments inside the window whose
/// reminder has not been sent are returned.
///
/// Expected: Ok with the single eligible appointment
#[tokio::test]
async fn selects_unreminded_upcoming_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, vehicle, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    let now = Utc::now();

    let due = AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .start_time(now + Duration::hours(3))
        .build()
        .await?;
    // Already reminded
    AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .start_time(now + Duration::hours(4))
        .reminder_sent(true)
        .build()
        .await?;
    // Cancelled
    AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .start_time(now + Duration::hours(5))
        .status("cancelled")
        .build()
        .await?;
    // Outside the window
    AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .start_time(now + Duration::hours(30))
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let results = repo
        .get_due_reminders(now, now + Duration::hours(24))
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].appointment.id, due.id);

    repo.mark_reminder_sent(due.id).await?;
    let results = repo
        .get_due_reminders(now, now + Duration::hours(24))
        .await?;
    assert!(results.is_empty());

    Ok(())
}
