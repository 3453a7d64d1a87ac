use crate::server::data::inventory::InventoryRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::inventory_item::InventoryItemFactory};

mod adjust_quantity;
mod count_low_stock;
mod get_low_stock;
