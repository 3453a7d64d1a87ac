use super::*;

/// Tests counting active vehicles per owner.
///
/// Verifies that inactive vehicles don't count and owners without vehicles are absent.
///
/// Expected: Ok with {owner: 2}
#[tokio::test]
async fn counts_active_vehicles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let without_vehicles = factory::create_user(db).await?;
    factory::create_vehicle(db, owner.id).await?;
    factory::create_vehicle(db, owner.id).await?;
    factory::vehicle::VehicleFactory::new(db, owner.id)
        .active(false)
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    let counts = repo
        .count_active_by_owners(vec![owner.id, without_vehicles.id])
        .await?;

    assert_eq!(counts.get(&owner.id), Some(&2));
    assert_eq!(counts.get(&without_vehicles.id), None);

    Ok(())
}
