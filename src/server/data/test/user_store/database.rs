use super::*;

/// Tests the database store against the shared store behavior.
///
/// Expected: Ok(()) and kind Database
#[tokio::test]
async fn satisfies_store_contract() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let store = DatabaseUserStore::new(db.clone());

    check_store_contract(&store).await?;
    assert_eq!(store.kind(), UserStoreKind::Database);

    Ok(())
}
