use super::*;

/// Tests creating a vehicle.
///
/// Verifies that the repository stores the vehicle for the given owner and returns it
/// with the owner's name attached.
///
/// Expected: Ok(Vehicle) with owner_name set
#[tokio::test]
async fn creates_vehicle_with_owner_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .name("Olivia Owner")
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    let vehicle = repo.create(owner.id, create_params("ABC-123")).await?;

    assert_eq!(vehicle.user_id, owner.id);
    assert_eq!(vehicle.owner_name.as_deref(), Some("Olivia Owner"));
    assert_eq!(vehicle.license_plate, "ABC-123");
    assert!(vehicle.active);
    assert_eq!(vehicle.label(), "2019 Toyota Corolla (ABC-123)");

    Ok(())
}

/// Tests duplicate license plate rejection.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_license_plate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = VehicleRepository::new(db);
    repo.create(owner.id, create_params("DUP-1")).await?;
    let result = repo.create(owner.id, create_params("DUP-1")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests creating a vehicle for an owner that does not exist.
///
/// Expected: Err with SqlErr::ForeignKeyConstraintViolation
#[tokio::test]
async fn rejects_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let result = repo.create(9999, create_params("NOBODY-1")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
