//! In-app notification models.

use chrono::{DateTime, Utc};

use crate::model::notification::NotificationDto;

pub const KIND_APPOINTMENT_BOOKED: &str = "appointment_booked";
pub const KIND_APPOINTMENT_STATUS: &str = "appointment_status";
pub const KIND_APPOINTMENT_REMINDER: &str = "appointment_reminder";
pub const KIND_LOW_STOCK: &str = "low_stock";

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub kind: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            kind: self.kind,
            message: self.message,
            read: self.read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            message: entity.message,
            read: entity.read,
            created_at: entity.created_at,
        }
    }
}
