//! User domain models and parameters.
//!
//! Provides the account model shared by every role along with parameter types
//! for sign up, staff-created accounts, and profile updates.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        auth::RegisterDto,
        client::{ClientDetailDto, ClientSummaryDto, UpdateClientDto},
        user::{CreateUserDto, PaginatedUsersDto, Role, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        model::vehicle::Vehicle,
        util::validation::{
            normalize_email, optional_text, validate_email, validate_password, RequiredFields,
        },
    },
};

/// Workshop account: a client, a mechanic, or a shop lead.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Normalized (trimmed, lower-cased) email used for login.
    pub email: String,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
    /// False once soft-deleted.
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped here.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            phone: self.phone,
            role: self.role,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Type)` - Stored role string is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = entity.role.parse::<Role>().map_err(DbErr::Type)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            name: entity.name,
            phone: entity.phone,
            role,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Validated input for creating an account.
///
/// Built from either the public sign up form (always a client) or the shop lead's
/// user management form (any role).
#[derive(Debug, Clone)]
pub struct NewAccountParams {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
}

impl NewAccountParams {
    /// # Returns
    /// - `Ok(NewAccountParams)` - Client account with normalized email
    /// - `Err(AppError::MissingFields)` - email, password or name absent
    /// - `Err(AppError::BadRequest)` - Malformed email or short password
    pub fn from_register_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let email = required.text("email", dto.email);
        let password = required.value("password", dto.password.filter(|p| !p.is_empty()));
        let name = required.text("name", dto.name);
        required.finish()?;

        Self::validated(email, password, name, dto.phone, Role::Client)
    }

    /// Same validation as sign up plus a required role.
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let email = required.text("email", dto.email);
        let password = required.value("password", dto.password.filter(|p| !p.is_empty()));
        let name = required.text("name", dto.name);
        let role = required.value("role", dto.role);
        required.finish()?;

        Self::validated(email, password, name, dto.phone, role)
    }

    fn validated(
        email: String,
        password: String,
        name: String,
        phone: Option<String>,
        role: Role,
    ) -> Result<Self, AppError> {
        let email = normalize_email(&email);
        validate_email(&email)?;
        validate_password(&password)?;

        Ok(Self {
            email,
            password,
            name,
            phone: optional_text(phone),
            role,
        })
    }
}

/// Row to insert once the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
}

impl CreateUserParams {
    pub fn from_account(account: NewAccountParams, password_hash: String) -> Self {
        Self {
            email: account.email,
            password_hash,
            name: account.name,
            phone: account.phone,
            role: account.role,
        }
    }
}

/// Partial profile update. `None` leaves a column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: optional_text(dto.name),
            phone: optional_text(dto.phone),
            email: None,
            role: dto.role,
        }
    }

    /// Client profile edits by staff; role is never changed through this path.
    pub fn from_client_dto(dto: UpdateClientDto) -> Result<Self, AppError> {
        let email = optional_text(dto.email).map(|e| normalize_email(&e));
        if let Some(email) = &email {
            validate_email(email)?;
        }

        Ok(Self {
            name: optional_text(dto.name),
            phone: optional_text(dto.phone),
            email,
            role: None,
        })
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    /// Total number of matching users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Only users with this role when set.
    pub role: Option<Role>,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

/// Client row for the staff client list.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSummary {
    pub client: User,
    /// Active vehicles owned by the client.
    pub vehicle_count: u64,
}

impl ClientSummary {
    pub fn into_dto(self) -> ClientSummaryDto {
        ClientSummaryDto {
            id: self.client.id,
            email: self.client.email,
            name: self.client.name,
            phone: self.client.phone,
            created_at: self.client.created_at,
            vehicle_count: self.vehicle_count,
        }
    }
}

/// Client with their active vehicles.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDetail {
    pub client: User,
    pub vehicles: Vec<Vehicle>,
}

impl ClientDetail {
    pub fn into_dto(self) -> ClientDetailDto {
        ClientDetailDto {
            id: self.client.id,
            email: self.client.email,
            name: self.client.name,
            phone: self.client.phone,
            created_at: self.client.created_at,
            vehicles: self.vehicles.into_iter().map(|v| v.into_dto()).collect(),
        }
    }
}
