//! Account sign up, login, and bearer token authentication.
//!
//! All identity lookups go through the injected `UserStore`, so these flows keep
//! working when the server runs on the in-memory fallback store.

pub mod password;
pub mod token;

use dioxus_logger::tracing;

use crate::server::{
    data::user_store::UserStore,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, NewAccountParams, User},
    service::auth::{
        password::{hash_password, verify_password},
        token::TokenService,
    },
    util::validation::normalize_email,
};

pub struct AuthService<'a> {
    store: &'a dyn UserStore,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(store: &'a dyn UserStore, tokens: &'a TokenService) -> Self {
        Self { store, tokens }
    }

    /// Creates an account and returns a token for it.
    ///
    /// # Returns
    /// - `Ok((token, User))` - New account and its session token
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, account: NewAccountParams) -> Result<(String, User), AppError> {
        let user = create_account(self.store, account).await?;
        let token = self.tokens.issue(&user)?;

        tracing::info!("Registered user {} as {}", user.id, user.role);

        Ok((token, user))
    }

    /// Verifies credentials and issues a token.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Credentials valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountInactive)` - Correct password on a deactivated account
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let email = normalize_email(email);

        let Some(user) = self.store.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.active {
            return Err(AuthError::AccountInactive(user.id).into());
        }

        let token = self.tokens.issue(&user)?;

        Ok((token, user))
    }

    /// Resolves a bearer token to the current active user.
    ///
    /// The user is reloaded from the store so deactivation and role changes take
    /// effect immediately rather than when the token expires.
    ///
    /// # Returns
    /// - `Ok(User)` - Active user with their stored role
    /// - `Err(AuthError::InvalidToken)` - Signature or expiry check failed
    /// - `Err(AuthError::UserNotFound)` - Subject missing or inactive
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = self.tokens.verify(token)?;
        let user_id = claims.user_id()?;

        match self.store.find_by_id(user_id).await? {
            Some(user) if user.active => Ok(user),
            _ => Err(AuthError::UserNotFound(user_id).into()),
        }
    }
}

/// Hashes the password and stores a new account with the requested role.
///
/// Shared by public sign up, shop lead user management, and the startup bootstrap.
///
/// # Returns
/// - `Ok(User)` - Created account
/// - `Err(AppError::Conflict)` - Email already registered
pub async fn create_account(
    store: &dyn UserStore,
    account: NewAccountParams,
) -> Result<User, AppError> {
    if store.find_by_email(&account.email).await?.is_some() {
        return Err(AppError::Conflict("Email is already registered".to_string()));
    }

    let password_hash = hash_password(&account.password)?;
    let user = store
        .create(CreateUserParams::from_account(account, password_hash))
        .await?;

    Ok(user)
}
