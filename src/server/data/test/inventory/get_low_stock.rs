use super::*;

/// Tests the low stock listing.
///
/// Verifies that items at or below their reorder threshold are returned, ordered by
/// name, and items above it are not.
///
/// Expected: Ok with "Air filter" and "Brake pads"
#[tokio::test]
async fn returns_items_at_or_below_threshold() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    InventoryItemFactory::new(db)
        .name("Brake pads")
        .quantity(2)
        .reorder_threshold(4)
        .build()
        .await?;
    InventoryItemFactory::new(db)
        .name("Air filter")
        .quantity(4)
        .reorder_threshold(4)
        .build()
        .await?;
    InventoryItemFactory::new(db)
        .name("Coolant")
        .quantity(5)
        .reorder_threshold(4)
        .build()
        .await?;

    let repo = InventoryRepository::new(db);
    let low = repo.get_low_stock().await?;

    let names: Vec<&str> = low.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Air filter", "Brake pads"]);

    Ok(())
}
