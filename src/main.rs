mod model;
mod server;

use axum::http::HeaderValue;
use dioxus_logger::tracing;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router, scheduler::appointment_reminders,
    service::auth::token::TokenService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dioxus_logger::init(tracing::Level::INFO)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let user_store = startup::select_user_store(&db, &config).await?;
    let tokens = TokenService::new(&config.jwt_secret, config.jwt_ttl_hours);

    startup::check_for_shop_lead(user_store.as_ref(), &config).await?;

    // Held for the lifetime of the server so the reminder job keeps running
    let _scheduler = appointment_reminders::start_scheduler(db.clone()).await?;

    let app = router::router()
        .with_state(AppState::new(db, user_store, tokens))
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Restricts CORS to `CORS_ORIGIN` when set, otherwise allows any origin.
fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(origin) = &config.cors_origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
