//! API handlers for the PSA-Audit REST endpoints

pub mod equipment;
pub mod health;
pub mod inspections;
pub mod openapi;
pub mod reports;
pub mod stats;
pub mod users;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Build the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment registry
        .route("/equipment", get(equipment::list_equipment))
        .route(
            "/equipment/selection",
            put(equipment::update_equipment_selection)
                .delete(equipment::clear_equipment_selection),
        )
        .route(
            "/equipment/selection/all",
            post(equipment::select_all_equipment),
        )
        .route("/equipment/:serial", get(equipment::get_equipment))
        .route("/equipment/:serial/facts", get(equipment::get_equipment_facts))
        // Inspection drafts
        .route(
            "/inspections",
            get(inspections::list_inspections).post(inspections::create_inspection),
        )
        .route(
            "/inspections/:id",
            get(inspections::get_inspection)
                .put(inspections::update_inspection)
                .delete(inspections::discard_inspection),
        )
        .route("/inspections/:id/items", post(inspections::add_inspection_item))
        .route(
            "/inspections/:id/items/:item_id",
            delete(inspections::remove_inspection_item),
        )
        .route(
            "/inspections/:id/items/:item_id/condition",
            put(inspections::set_item_condition),
        )
        .route(
            "/inspections/:id/items/:item_id/outcome",
            put(inspections::set_item_outcome),
        )
        .route(
            "/inspections/:id/items/:item_id/next-inspection",
            put(inspections::set_item_next_inspection),
        )
        .route(
            "/inspections/:id/items/:item_id/remarks",
            put(inspections::set_item_remarks),
        )
        .route(
            "/inspections/:id/validation",
            get(inspections::get_inspection_validation),
        )
        .route("/inspections/:id/complete", post(inspections::complete_inspection))
        .route("/inspections/:id/save", post(inspections::save_inspection))
        // Report archive
        .route("/reports", get(reports::list_reports))
        .route(
            "/reports/selection",
            put(reports::update_report_selection).delete(reports::clear_report_selection),
        )
        .route("/reports/selection/all", post(reports::select_all_reports))
        .route("/reports/:id", get(reports::get_report))
        // User directory
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/selection",
            put(users::update_user_selection).delete(users::clear_user_selection),
        )
        .route("/users/selection/all", post(users::select_all_users))
        .route("/users/:id", get(users::get_user))
        // Statistics
        .route("/stats", get(stats::get_stats))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
