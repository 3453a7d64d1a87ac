use super::*;

/// Tests client search by name or email substring.
///
/// Verifies that only active clients are returned and that the search term matches
/// either column.
///
/// Expected: Ok with the client matching by name and the one matching by email
#[tokio::test]
async fn matches_name_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_name = factory::user::UserFactory::new(db)
        .name("Dana Carter")
        .build()
        .await?;
    let by_email = factory::user::UserFactory::new(db)
        .name("Evan Brooks")
        .email("carter.family@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Frank Carter")
        .active(false)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Gina Carter")
        .role("mechanic")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let clients = repo.search_clients(Some("Carter")).await?;

    let ids: Vec<i32> = clients.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&by_name.id));
    assert!(ids.contains(&by_email.id));

    Ok(())
}

/// Tests listing every client without a search term.
///
/// Expected: Ok with all active clients
#[tokio::test]
async fn returns_all_clients_without_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;
    factory::create_shop_lead(db).await?;

    let repo = UserRepository::new(db);
    let clients = repo.search_clients(None).await?;

    assert_eq!(clients.len(), 2);
    assert!(clients.iter().all(|c| c.role == Role::Client));

    Ok(())
}
