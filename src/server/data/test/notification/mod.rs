use crate::server::data::notification::NotificationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_user;
mod mark_read;
