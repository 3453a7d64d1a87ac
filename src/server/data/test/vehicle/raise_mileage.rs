use super::*;

/// Tests raising mileage to a higher reading.
///
/// Expected: Ok(true) and the new mileage stored
#[tokio::test]
async fn raises_lower_mileage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, owner.id)
        .mileage(10_000)
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    assert!(repo.raise_mileage(vehicle.id, 12_500).await?);

    let stored = repo.find_active_by_id(vehicle.id).await?.unwrap();
    assert_eq!(stored.mileage, Some(12_500));

    Ok(())
}

/// Tests that a lower reading never reduces recorded mileage.
///
/// Expected: Ok(false) and mileage unchanged
#[tokio::test]
async fn keeps_higher_mileage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, owner.id)
        .mileage(50_000)
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    assert!(!repo.raise_mileage(vehicle.id, 40_000).await?);

    let stored = repo.find_active_by_id(vehicle.id).await?.unwrap();
    assert_eq!(stored.mileage, Some(50_000));

    Ok(())
}
