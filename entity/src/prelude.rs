pub use super::appointment::Entity as Appointment;
pub use super::inventory_item::Entity as InventoryItem;
pub use super::maintenance_history::Entity as MaintenanceHistory;
pub use super::notification::Entity as Notification;
pub use super::service::Entity as Service;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
