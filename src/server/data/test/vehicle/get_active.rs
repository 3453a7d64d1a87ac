use super::*;

/// Tests listing vehicles for one owner.
///
/// Verifies that soft-deleted vehicles and other owners' vehicles are excluded.
///
/// Expected: Ok with only the owner's active vehicle
#[tokio::test]
async fn filters_by_owner_and_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let kept = factory::create_vehicle(db, owner.id).await?;
    factory::vehicle::VehicleFactory::new(db, owner.id)
        .active(false)
        .build()
        .await?;
    factory::create_vehicle(db, other.id).await?;

    let repo = VehicleRepository::new(db);
    let vehicles = repo.get_active(Some(owner.id)).await?;

    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].id, kept.id);

    let all = repo.get_active(None).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests ordering by make then model.
///
/// Expected: Ok with vehicles sorted by make, then model
#[tokio::test]
async fn orders_by_make_then_model() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    for (make, model) in [("Volvo", "V60"), ("Audi", "A4"), ("Audi", "A3")] {
        factory::vehicle::VehicleFactory::new(db, owner.id)
            .make(make)
            .model(model)
            .build()
            .await?;
    }

    let repo = VehicleRepository::new(db);
    let vehicles = repo.get_active(None).await?;

    let labels: Vec<String> = vehicles
        .iter()
        .map(|v| format!("{} {}", v.make, v.model))
        .collect();
    assert_eq!(labels, vec!["Audi A3", "Audi A4", "Volvo V60"]);

    Ok(())
}
