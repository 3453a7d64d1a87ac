use super::*;

/// Tests partial profile update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok(Some(User)) with new name and phone, email unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                name: Some("Renamed".to_string()),
                phone: Some("555-0100".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.phone.as_deref(), Some("555-0100"));
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.role, Role::Client);

    Ok(())
}

/// Tests updating a deactivated user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_inactive_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            user.id,
            UpdateUserParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
