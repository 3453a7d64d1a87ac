//! Service catalog domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::service::{CreateServiceDto, ServiceDto, UpdateServiceDto},
    server::{
        error::AppError,
        util::validation::{optional_text, RequiredFields},
    },
};

/// Bookable catalog service with its list price and estimated duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub base_price_cents: i64,
    pub duration_minutes: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            id: self.id,
            name: self.name,
            description: self.description,
            base_price_cents: self.base_price_cents,
            duration_minutes: self.duration_minutes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::service::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            base_price_cents: entity.base_price_cents,
            duration_minutes: entity.duration_minutes,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

fn validate_pricing(price: Option<i64>, duration: Option<i32>) -> Result<(), AppError> {
    if price.is_some_and(|p| p < 0) {
        return Err(AppError::BadRequest("Price cannot be negative".to_string()));
    }
    if duration.is_some_and(|d| d <= 0) {
        return Err(AppError::BadRequest(
            "Duration must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct CreateServiceParams {
    pub name: String,
    pub description: Option<String>,
    pub base_price_cents: i64,
    pub duration_minutes: i32,
}

impl CreateServiceParams {
    /// # Returns
    /// - `Err(AppError::MissingFields)` - name, base_price_cents or duration_minutes absent
    /// - `Err(AppError::BadRequest)` - Negative price or non-positive duration
    pub fn from_dto(dto: CreateServiceDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let name = required.text("name", dto.name);
        let base_price_cents = required.value("base_price_cents", dto.base_price_cents);
        let duration_minutes = required.value("duration_minutes", dto.duration_minutes);
        required.finish()?;

        validate_pricing(Some(base_price_cents), Some(duration_minutes))?;

        Ok(Self {
            name,
            description: optional_text(dto.description),
            base_price_cents,
            duration_minutes,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServiceParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price_cents: Option<i64>,
    pub duration_minutes: Option<i32>,
}

impl UpdateServiceParams {
    pub fn from_dto(dto: UpdateServiceDto) -> Result<Self, AppError> {
        validate_pricing(dto.base_price_cents, dto.duration_minutes)?;

        Ok(Self {
            name: optional_text(dto.name),
            description: optional_text(dto.description),
            base_price_cents: dto.base_price_cents,
            duration_minutes: dto.duration_minutes,
        })
    }
}
