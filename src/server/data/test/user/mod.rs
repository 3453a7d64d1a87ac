use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        model::user::{CreateUserParams, UpdateUserParams},
    },
};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod deactivate;
mod get_all_paginated;
mod search_clients;
mod update;

fn create_params(email: &str, role: Role) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        name: "Test User".to_string(),
        phone: None,
        role,
    }
}
