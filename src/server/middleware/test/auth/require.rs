use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = app_state(db);

    let headers = HeaderMap::new();
    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a malformed token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = app_state(db);

    let headers = headers_with_token("not-a-token");
    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a correctly signed token that has expired.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = app_state(db);

    let user = factory::create_user(db).await?;
    let now = Utc::now().timestamp();
    let token = state.tokens.encode(&Claims {
        sub: user.id.to_string(),
        role: Role::Client,
        iat: now - 7200,
        exp: now - 3600,
    })?;

    let headers = headers_with_token(&token);
    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token for a deactivated user.
///
/// Verifies that deactivation takes effect before the token expires.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = app_state(db);

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;

    let headers = bearer_headers(&state, &user);
    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(id))) if id == user.id
    ));

    Ok(())
}

/// Tests a client calling a staff route.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_client_staff_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = app_state(db);

    let client = factory::create_user(db).await?;

    let headers = bearer_headers(&state, &client);
    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Staff])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests role checks for mechanics.
///
/// Verifies that a mechanic passes the staff check but not the shop lead check.
///
/// Expected: Ok(User) for Staff, Err(AccessDenied) for ShopLead
#[tokio::test]
async fn mechanic_is_staff_but_not_shop_lead() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = app_state(db);

    let mechanic = factory::create_mechanic(db).await?;
    let headers = bearer_headers(&state, &mechanic);

    let user = AuthGuard::new(&state, &headers)
        .require(&[Permission::Staff])
        .await?;
    assert_eq!(user.id, mechanic.id);
    assert_eq!(user.role, Role::Mechanic);

    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that authorization uses the stored role, not the token's role claim.
///
/// Expected: Err(AccessDenied) for a client holding a token that claims shop lead
#[tokio::test]
async fn uses_stored_role_over_claim() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = app_state(db);

    let client = factory::create_user(db).await?;
    let now = Utc::now().timestamp();
    let token = state.tokens.encode(&Claims {
        sub: client.id.to_string(),
        role: Role::ShopLead,
        iat: now,
        exp: now + 3600,
    })?;

    let headers = headers_with_token(&token);
    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::ShopLead])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
