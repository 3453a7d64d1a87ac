use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns the requested page and the total number of
/// matching users.
///
/// Expected: Ok with 2 users on each of the first two pages and total=5
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let (users, total) = repo.get_all_paginated(None, 0, 2).await?;
    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);

    let (users, _) = repo.get_all_paginated(None, 2, 2).await?;
    assert_eq!(users.len(), 1);

    Ok(())
}

/// Tests filtering by role and hiding deactivated users.
///
/// Expected: Ok with only the active mechanic
#[tokio::test]
async fn filters_by_role_and_skips_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let mechanic = factory::create_mechanic(db).await?;
    factory::user::UserFactory::new(db)
        .role("mechanic")
        .active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_all_paginated(Some(Role::Mechanic), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].id, mechanic.id);

    Ok(())
}

/// Tests users are ordered alphabetically by name.
///
/// Expected: Ok with users sorted by name
#[tokio::test]
async fn orders_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alice", "Bob"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let (users, _) = repo.get_all_paginated(None, 0, 10).await?;

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    Ok(())
}
