use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_JWT_TTL_HOURS: i64 = 24;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const MIN_JWT_SECRET_LEN: usize = 32;
/// Token lifetime bounds in hours: at least one hour, at most one year.
const JWT_TTL_HOURS_RANGE: std::ops::RangeInclusive<i64> = 1..=8760;

/// Credentials for the first shop lead, created when none exists.
#[derive(Debug, Clone)]
pub struct BootstrapShopLead {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,

    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,

    pub bind_address: String,
    pub cors_origin: Option<String>,

    /// Serve identity from memory when the database cannot be reached at startup.
    pub user_store_fallback: bool,
    pub bootstrap_shop_lead: Option<BootstrapShopLead>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_JWT_SECRET_LEN),
            }
            .into());
        }

        let bootstrap_shop_lead = match (
            optional("BOOTSTRAP_SHOP_LEAD_EMAIL"),
            optional("BOOTSTRAP_SHOP_LEAD_PASSWORD"),
        ) {
            (Some(email), Some(password)) => Some(BootstrapShopLead { email, password }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(
                    ConfigError::MissingEnvVar("BOOTSTRAP_SHOP_LEAD_PASSWORD".to_string()).into(),
                )
            }
            (None, Some(_)) => {
                return Err(
                    ConfigError::MissingEnvVar("BOOTSTRAP_SHOP_LEAD_EMAIL".to_string()).into(),
                )
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            db_max_connections: parsed("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            jwt_secret,
            jwt_ttl_hours: jwt_ttl_hours(parsed("JWT_TTL_HOURS", DEFAULT_JWT_TTL_HOURS)?)?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origin: optional("CORS_ORIGIN"),
            user_store_fallback: parsed("USER_STORE_FALLBACK", false)?,
            bootstrap_shop_lead,
        })
    }
}

fn jwt_ttl_hours(hours: i64) -> Result<i64, ConfigError> {
    if JWT_TTL_HOURS_RANGE.contains(&hours) {
        Ok(hours)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: "JWT_TTL_HOURS".to_string(),
            reason: format!(
                "must be between {} and {} hours, got {}",
                JWT_TTL_HOURS_RANGE.start(),
                JWT_TTL_HOURS_RANGE.end(),
                hours
            ),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and blank variables are treated the same.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}
