//! Signed session tokens.
//!
//! Tokens are HS256 JWTs carrying the user ID (`sub`), the role at issue time, and
//! issue/expiry timestamps. The role claim is informational; authorization always uses
//! the role stored for the user.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::user::User,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User ID as a decimal string.
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// # Returns
    /// - `Ok(i32)` - The user ID in `sub`
    /// - `Err(AuthError::InvalidToken)` - `sub` is not a number
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("Invalid subject '{}'", self.sub)))
    }
}

/// Issues and verifies tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Issues a token for `user` valid for the configured lifetime.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        self.encode(&claims)
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Checks signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and unexpired
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed, or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
