pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_vehicle_table;
mod m20260301_000003_create_service_table;
mod m20260301_000004_create_appointment_table;
mod m20260301_000005_create_inventory_item_table;
mod m20260301_000006_create_maintenance_history_table;
mod m20260315_000007_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_vehicle_table::Migration),
            Box::new(m20260301_000003_create_service_table::Migration),
            Box::new(m20260301_000004_create_appointment_table::Migration),
            Box::new(m20260301_000005_create_inventory_item_table::Migration),
            Box::new(m20260301_000006_create_maintenance_history_table::Migration),
            Box::new(m20260315_000007_create_notification_table::Migration),
        ]
    }
}
