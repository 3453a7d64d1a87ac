//! Factory methods for creating test data.
//!
//! Each table has its own factory module with a `Factory` builder for customization and
//! a `create_*` convenience function for quick default creation. Factories take the
//! foreign keys they need explicitly; `helpers` bundles common dependency chains.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let client = factory::create_user(&db).await?;
//! let vehicle = factory::create_vehicle(&db, client.id).await?;
//!
//! let mechanic = factory::user::UserFactory::new(&db)
//!     .role("mechanic")
//!     .build()
//!     .await?;
//! ```

pub mod appointment;
pub mod helpers;
pub mod inventory_item;
pub mod service;
pub mod user;
pub mod vehicle;

pub use appointment::create_appointment;
pub use inventory_item::create_inventory_item;
pub use service::create_service;
pub use user::{create_mechanic, create_shop_lead, create_user};
pub use vehicle::create_vehicle;
