use super::*;

/// Tests counting items at or below their reorder threshold.
///
/// Expected: Ok(2) with one item above its threshold left out
#[tokio::test]
async fn counts_items_at_or_below_threshold() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (quantity, threshold) in [(0, 3), (3, 3), (10, 3)] {
        InventoryItemFactory::new(db)
            .quantity(quantity)
            .reorder_threshold(threshold)
            .build()
            .await?;
    }

    let repo = InventoryRepository::new(db);

    assert_eq!(repo.count_low_stock().await?, 2);

    Ok(())
}

/// Tests counting with no stock items at all.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(InventoryRepository::new(db).count_low_stock().await?, 0);

    Ok(())
}
