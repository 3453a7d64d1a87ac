use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Self-service sign up. Required: email, password, name.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct RegisterDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Bearer token plus the signed-in user.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}
