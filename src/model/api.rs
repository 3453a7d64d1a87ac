use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ErrorDto {
    pub error: String,
    /// Structured context, e.g. `{"missing_fields": ["email"]}` for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<serde_json::Value>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct HealthDto {
    pub status: String,
    /// `database` or `memory`
    pub user_store: String,
}
