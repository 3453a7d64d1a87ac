use dioxus_logger::tracing;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

use crate::{
    model::user::Role,
    server::{
        config::Config,
        data::user_store::{DatabaseUserStore, MemoryUserStore, UserStore},
        error::AppError,
        model::user::NewAccountParams,
        service::auth::create_account,
        util::validation::normalize_email,
    },
};

const BOOTSTRAP_SHOP_LEAD_NAME: &str = "Shop Lead";

/// Creates the database connection pool.
///
/// The pool connects lazily so startup can continue on the in-memory user store when the
/// database is unreachable; see `select_user_store`.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool handle, not yet connected
/// - `Err(AppError)` - Invalid connection string
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.db_max_connections)
        .connect_lazy(true)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Runs pending migrations and picks the identity store.
///
/// # Returns
/// - `Ok(DatabaseUserStore)` - Migrations applied
/// - `Ok(MemoryUserStore)` - Migrations failed and `USER_STORE_FALLBACK` is enabled
/// - `Err(AppError)` - Migrations failed and fallback is disabled
pub async fn select_user_store(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<Arc<dyn UserStore>, AppError> {
    match Migrator::up(db, None).await {
        Ok(()) => Ok(Arc::new(DatabaseUserStore::new(db.clone()))),
        Err(e) if config.user_store_fallback => {
            tracing::warn!(
                "Database unavailable ({}); serving accounts from memory. \
                 Accounts created now are lost on restart and other endpoints will fail.",
                e
            );
            Ok(Arc::new(MemoryUserStore::new()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Creates the first shop lead from configuration when no active shop lead exists.
///
/// Without bootstrap credentials a warning is logged instead, since no account could
/// reach the user management endpoints.
pub async fn check_for_shop_lead(store: &dyn UserStore, config: &Config) -> Result<(), AppError> {
    if store.role_exists(Role::ShopLead).await? {
        return Ok(());
    }

    let Some(bootstrap) = &config.bootstrap_shop_lead else {
        tracing::warn!(
            "No shop lead account exists. Set BOOTSTRAP_SHOP_LEAD_EMAIL and \
             BOOTSTRAP_SHOP_LEAD_PASSWORD to create one at startup."
        );
        return Ok(());
    };

    let user = create_account(
        store,
        NewAccountParams {
            email: normalize_email(&bootstrap.email),
            password: bootstrap.password.clone(),
            name: BOOTSTRAP_SHOP_LEAD_NAME.to_string(),
            phone: None,
            role: Role::ShopLead,
        },
    )
    .await?;

    tracing::info!("Created bootstrap shop lead {} ({})", user.id, user.email);

    Ok(())
}
