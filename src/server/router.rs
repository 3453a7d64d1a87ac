//! HTTP routing and OpenAPI documentation.
//!
//! Every endpoint is registered through utoipa-axum so its OpenAPI annotation is
//! collected into one document, served at `/api/docs/openapi.json` with Swagger UI at
//! `/api/docs`. Handlers sharing a path are registered together.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the API router with Swagger UI attached.
///
/// # Returns
/// A `Router<AppState>`; call `.with_state()` before serving.
pub fn router() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Workshop", description = "Workshop management API"),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Sign up, sign in, and current user"),
            (name = controller::user::USER_TAG, description = "Account management for shop leads"),
            (name = controller::client::CLIENT_TAG, description = "Client records for staff"),
            (name = controller::vehicle::VEHICLE_TAG, description = "Vehicles and maintenance history"),
            (name = controller::service::SERVICE_TAG, description = "Service catalog"),
            (name = controller::appointment::APPOINTMENT_TAG, description = "Appointment booking and calendar"),
            (name = controller::inventory::INVENTORY_TAG, description = "Parts inventory"),
            (name = controller::report::REPORT_TAG, description = "Dashboard and revenue reports"),
            (name = controller::notification::NOTIFICATION_TAG, description = "In-app notifications"),
            (name = controller::health::HEALTH_TAG, description = "Liveness"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::me))
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::client::get_clients))
        .routes(routes!(
            controller::client::get_client,
            controller::client::update_client,
            controller::client::delete_client
        ))
        .routes(routes!(
            controller::vehicle::get_vehicles,
            controller::vehicle::create_vehicle
        ))
        .routes(routes!(
            controller::vehicle::get_vehicle,
            controller::vehicle::update_vehicle,
            controller::vehicle::delete_vehicle
        ))
        .routes(routes!(
            controller::vehicle::get_vehicle_history,
            controller::vehicle::create_vehicle_history
        ))
        .routes(routes!(
            controller::service::get_services,
            controller::service::create_service
        ))
        .routes(routes!(
            controller::service::get_service,
            controller::service::update_service,
            controller::service::delete_service
        ))
        .routes(routes!(
            controller::appointment::get_appointments,
            controller::appointment::create_appointment
        ))
        .routes(routes!(
            controller::appointment::get_appointment,
            controller::appointment::update_appointment,
            controller::appointment::delete_appointment
        ))
        .routes(routes!(
            controller::inventory::get_inventory,
            controller::inventory::create_inventory_item
        ))
        .routes(routes!(
            controller::inventory::get_inventory_item,
            controller::inventory::update_inventory_item,
            controller::inventory::delete_inventory_item
        ))
        .routes(routes!(controller::inventory::adjust_inventory_item))
        .routes(routes!(controller::report::get_dashboard))
        .routes(routes!(controller::report::get_revenue))
        .routes(routes!(controller::notification::get_notifications))
        .routes(routes!(controller::notification::mark_all_notifications_read))
        .routes(routes!(controller::notification::mark_notification_read))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
