//! Dashboard statistics endpoint

use axum::{extract::State, Json};

use crate::services::stats::DashboardStats;

/// Headline numbers for the dashboard
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> Json<DashboardStats> {
    Json(state.services.stats.dashboard().await)
}
