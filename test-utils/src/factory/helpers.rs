//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating rows
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep unique columns (emails, plates, SKUs, names) distinct across
/// factory-created rows.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a client, a vehicle owned by that client, and a catalog service.
///
/// Everything needed before an appointment can be booked.
///
/// # Returns
/// - `Ok((client, vehicle, service))` - Created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::vehicle::Model,
        entity::service::Model,
    ),
    DbErr,
> {
    let client = crate::factory::user::create_user(db).await?;
    let vehicle = crate::factory::vehicle::create_vehicle(db, client.id).await?;
    let service = crate::factory::service::create_service(db).await?;

    Ok((client, vehicle, service))
}

/// Creates an appointment together with its client, vehicle and service.
///
/// # Returns
/// - `Ok((client, vehicle, service, appointment))` - Created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::vehicle::Model,
        entity::service::Model,
        entity::appointment::Model,
    ),
    DbErr,
> {
    let (client, vehicle, service) = create_booking_dependencies(db).await?;
    let appointment =
        crate::factory::appointment::create_appointment(db, client.id, vehicle.id, &service)
            .await?;

    Ok((client, vehicle, service, appointment))
}
