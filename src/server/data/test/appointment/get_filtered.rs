use super::*;

/// Tests the calendar range filter.
///
/// Verifies that `from` is inclusive, `to` is exclusive, and results are ordered by
/// start time.
///
/// Expected: Ok with the 09:00 and 10:00 appointments, in that order
#[tokio::test]
async fn applies_half_open_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, vehicle, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    let day = Utc.with_ymd_and_hms(2026, 5, 4, 0, 0, 0).unwrap();

    let mut ids = Vec::new();
    for hour in [10, 9, 12] {
        let appointment = AppointmentFactory::new(db, client.id, vehicle.id, &service)
            .start_time(day + Duration::hours(hour))
            .build()
            .await?;
        ids.push(appointment.id);
    }

    let repo = AppointmentRepository::new(db);
    let results = repo
        .get_filtered(AppointmentFilter {
            from: Some(day + Duration::hours(9)),
            to: Some(day + Duration::hours(12)),
            ..Default::default()
        })
        .await?;

    let found: Vec<i32> = results.iter().map(|d| d.appointment.id).collect();
    assert_eq!(found, vec![ids[1], ids[0]]);

    Ok(())
}

/// Tests that listings carry the joined display names.
///
/// Expected: Ok with client, vehicle, service and mechanic names populated
#[tokio::test]
async fn includes_display_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::user::UserFactory::new(db)
        .name("Carla Client")
        .build()
        .await?;
    let mechanic = factory::user::UserFactory::new(db)
        .name("Mo Mechanic")
        .role("mechanic")
        .build()
        .await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, client.id)
        .make("Honda")
        .model("Civic")
        .license_plate("CIV-1")
        .build()
        .await?;
    let service = factory::service::ServiceFactory::new(db)
        .name("Oil change")
        .build()
        .await?;
    AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .mechanic_id(mechanic.id)
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let results = repo.get_filtered(AppointmentFilter::default()).await?;

    assert_eq!(results.len(), 1);
    let details = &results[0];
    assert_eq!(details.client_name.as_deref(), Some("Carla Client"));
    assert_eq!(details.mechanic_name.as_deref(), Some("Mo Mechanic"));
    assert_eq!(details.service_name.as_deref(), Some("Oil change"));
    assert_eq!(
        details.vehicle_label.as_deref(),
        Some(format!("{} Honda Civic (CIV-1)", vehicle.year).as_str())
    );

    Ok(())
}

/// Tests filtering by assigned mechanic and status.
///
/// Expected: Ok with only the confirmed appointment assigned to the mechanic
#[tokio::test]
async fn filters_by_mechanic_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, vehicle, service) =
        factory::helpers::create_booking_dependencies(db).await?;
    let mechanic = factory::create_mechanic(db).await?;

    let expected = AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .mechanic_id(mechanic.id)
        .status("confirmed")
        .build()
        .await?;
    AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .mechanic_id(mechanic.id)
        .build()
        .await?;
    AppointmentFactory::new(db, client.id, vehicle.id, &service)
        .status("confirmed")
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let results = repo
        .get_filtered(AppointmentFilter {
            mechanic_id: Some(mechanic.id),
            status: Some("confirmed".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].appointment.id, expected.id);

    Ok(())
}
