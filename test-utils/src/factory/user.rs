//! User factory for creating test user rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored in `password_hash` when a test does not log in.
///
/// Not a valid PHC string, so verification against it always fails.
pub const UNUSABLE_PASSWORD_HASH: &str = "!unusable";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let lead = UserFactory::new(&db)
///     .email("lead@example.com")
///     .role("shop_lead")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password_hash: String,
    name: String,
    phone: Option<String>,
    role: String,
    active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"`
    /// - name: `"User {id}"`
    /// - role: `"client"`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            password_hash: UNUSABLE_PASSWORD_HASH.to_string(),
            name: format!("User {}", id),
            phone: None,
            role: "client".to_string(),
            active: true,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash, e.g. one produced by the argon2 hasher.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the role: `client`, `mechanic` or `shop_lead`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the user row.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            role: ActiveValue::Set(self.role),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active client with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an active mechanic with default values.
pub async fn create_mechanic(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("mechanic").build().await
}

/// Creates an active shop lead with default values.
pub async fn create_shop_lead(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("shop_lead").build().await
}
