use super::*;

/// Tests creating a user.
///
/// Verifies that the repository stores the role as its string form and returns an
/// active domain user.
///
/// Expected: Ok(User) with role Mechanic and active=true
#[tokio::test]
async fn creates_active_user_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(create_params("mech@example.com", Role::Mechanic))
        .await?;

    assert_eq!(user.email, "mech@example.com");
    assert_eq!(user.role, Role::Mechanic);
    assert!(user.active);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.role, "mechanic");

    Ok(())
}

/// Tests duplicate email rejection.
///
/// Verifies that inserting a second user with the same email fails with a unique
/// constraint violation, which the error layer maps to 409.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("dup@example.com", Role::Client))
        .await?;

    let result = repo
        .create(create_params("dup@example.com", Role::Client))
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
