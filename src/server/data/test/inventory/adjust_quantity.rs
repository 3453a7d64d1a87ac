use super::*;

/// Tests adding stock to an item.
///
/// Expected: Ok(Some((before, after))) with quantity going from 20 to 25
#[tokio::test]
async fn returns_before_and_after() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_inventory_item(db).await?;

    let repo = InventoryRepository::new(db);
    let (before, after) = repo.adjust_quantity(item.id, 5).await?.unwrap();

    assert_eq!(before.quantity, 20);
    assert_eq!(after.quantity, 25);

    let stored = repo.find_by_id(item.id).await?.unwrap();
    assert_eq!(stored.quantity, 25);

    Ok(())
}

/// Tests removing more stock than is on hand.
///
/// Verifies that quantity is allowed to go negative.
///
/// Expected: Ok(Some(..)) with quantity -3
#[tokio::test]
async fn allows_negative_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = InventoryItemFactory::new(db).quantity(2).build().await?;

    let repo = InventoryRepository::new(db);
    let (_, after) = repo.adjust_quantity(item.id, -5).await?.unwrap();

    assert_eq!(after.quantity, -3);

    Ok(())
}

/// Tests adjusting an item that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InventoryRepository::new(db);
    let result = repo.adjust_quantity(42, 1).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests two adjustments to the same item issued together.
///
/// Verifies that neither delta is lost and each call reports the quantity its own
/// update produced.
///
/// Expected: stored quantity 20 + 3 - 1 = 22
#[tokio::test]
async fn concurrent_adjustments_keep_both_deltas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_inventory_item(db).await?;

    let repo = InventoryRepository::new(db);
    let (added, removed) = tokio::join!(
        repo.adjust_quantity(item.id, 3),
        repo.adjust_quantity(item.id, -1),
    );
    let (added_before, added_after) = added?.unwrap();
    let (removed_before, removed_after) = removed?.unwrap();

    assert_eq!(added_after.quantity - added_before.quantity, 3);
    assert_eq!(removed_after.quantity - removed_before.quantity, -1);

    let stored = repo.find_by_id(item.id).await?.unwrap();
    assert_eq!(stored.quantity, 22);

    Ok(())
}
