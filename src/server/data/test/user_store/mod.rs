use crate::{
    model::user::Role,
    server::{
        data::user_store::{DatabaseUserStore, MemoryUserStore, UserStore, UserStoreKind},
        error::AppError,
        model::user::CreateUserParams,
    },
};
use test_utils::builder::TestBuilder;

mod database;
mod memory;

fn create_params(email: &str, role: Role) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        name: "Store User".to_string(),
        phone: None,
        role,
    }
}

/// Runs the behavior every `UserStore` must share.
async fn check_store_contract(store: &dyn UserStore) -> Result<(), AppError> {
    assert!(!store.role_exists(Role::ShopLead).await?);

    let created = store
        .create(create_params("lead@example.com", Role::ShopLead))
        .await?;
    assert!(created.active);
    assert_eq!(created.role, Role::ShopLead);

    let by_id = store.find_by_id(created.id).await?.unwrap();
    assert_eq!(by_id.email, "lead@example.com");

    let by_email = store.find_by_email("lead@example.com").await?.unwrap();
    assert_eq!(by_email.id, created.id);

    assert!(store.find_by_email("nobody@example.com").await?.is_none());
    assert!(store.role_exists(Role::ShopLead).await?);
    assert!(!store.role_exists(Role::Mechanic).await?);

    let duplicate = store
        .create(create_params("lead@example.com", Role::Client))
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_)) | Err(AppError::DbErr(_))));

    Ok(())
}
