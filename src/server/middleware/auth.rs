use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::user::User,
        service::auth::AuthService,
        state::AppState,
    },
};

const BEARER_PREFIX: &str = "Bearer ";

pub enum Permission {
    /// Mechanic or shop lead.
    Staff,
    ShopLead,
}

/// Resolves the bearer token on a request and checks role permissions.
///
/// ```rust,ignore
/// let user = AuthGuard::new(&state, &headers)
///     .require(&[Permission::ShopLead])
///     .await?;
/// ```
pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Authenticates the request and checks every listed permission.
    ///
    /// An empty slice only requires a valid token for an active user.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with their stored role
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotFound)` - 401
    /// - `Err(AuthError::AccessDenied)` - 403, role lacks a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers)?;

        let user = AuthService::new(self.state.user_store.as_ref(), &self.state.tokens)
            .authenticate(token)
            .await?;

        for permission in permissions {
            match permission {
                Permission::Staff => {
                    if !user.role.is_staff() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Staff role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::ShopLead => {
                    if user.role != Role::ShopLead {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Shop lead role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Authorization header is not ASCII".to_string()))?;

    value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}
