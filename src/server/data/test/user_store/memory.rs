use super::*;

/// Tests the in-memory store against the shared store behavior.
///
/// Expected: Ok(()) and kind Memory
#[tokio::test]
async fn satisfies_store_contract() -> Result<(), AppError> {
    let store = MemoryUserStore::new();

    check_store_contract(&store).await?;
    assert_eq!(store.kind(), UserStoreKind::Memory);

    Ok(())
}

/// Tests that ids are assigned sequentially.
///
/// Expected: Ok with ids 1 and 2
#[tokio::test]
async fn assigns_sequential_ids() -> Result<(), AppError> {
    let store = MemoryUserStore::new();

    let first = store
        .create(create_params("a@example.com", Role::Client))
        .await?;
    let second = store
        .create(create_params("b@example.com", Role::Client))
        .await?;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    Ok(())
}

/// Tests creating a second account with the same email.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let store = MemoryUserStore::new();

    store
        .create(create_params("dup@example.com", Role::Client))
        .await?;
    let result = store
        .create(create_params("dup@example.com", Role::Client))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
