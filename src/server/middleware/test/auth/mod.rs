use axum::http::HeaderMap;
use chrono::Utc;

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        service::auth::token::Claims,
        util::test::{app_state, bearer_headers, headers_with_token},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require;
