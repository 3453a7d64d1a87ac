use super::*;

/// Tests soft deleting a user.
///
/// Verifies that the row is kept with active=false and that a second deactivation
/// reports nothing changed.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn soft_deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.deactivate(user.id).await?);
    assert!(!repo.deactivate(user.id).await?);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert!(!stored.active);
    assert!(repo.search_clients(None).await?.is_empty());

    Ok(())
}
