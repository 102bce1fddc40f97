//! Report archive endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{report::ReportQuery, InspectionReport},
    services::archive::ReportPage,
};

/// Toggle selection of one archive row
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReportSelectionUpdate {
    pub id: Uuid,
    pub selected: bool,
}

/// List reports, filtered by search term, status and year
#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "Filtered report page", body = ReportPage)
    )
)]
pub async fn list_reports(
    State(state): State<crate::AppState>,
    Query(query): Query<ReportQuery>,
) -> Json<ReportPage> {
    Json(state.services.archive.list(&query).await)
}

/// Get one report by ID
#[utoipa::path(
    get,
    path = "/reports/{id}",
    tag = "reports",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report", body = InspectionReport),
        (status = 404, description = "Unknown report")
    )
)]
pub async fn get_report(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<InspectionReport>> {
    Ok(Json(state.services.archive.get(id).await?))
}

/// Toggle one row in the archive selection
#[utoipa::path(
    put,
    path = "/reports/selection",
    tag = "reports",
    request_body = ReportSelectionUpdate,
    responses(
        (status = 204, description = "Selection updated")
    )
)]
pub async fn update_report_selection(
    State(state): State<crate::AppState>,
    Json(update): Json<ReportSelectionUpdate>,
) -> StatusCode {
    state
        .services
        .archive
        .set_selected(update.id, update.selected)
        .await;
    StatusCode::NO_CONTENT
}

/// Select every report visible under the given filters
#[utoipa::path(
    post,
    path = "/reports/selection/all",
    tag = "reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "Report ids now selected", body = Vec<Uuid>)
    )
)]
pub async fn select_all_reports(
    State(state): State<crate::AppState>,
    Query(query): Query<ReportQuery>,
) -> Json<Vec<Uuid>> {
    Json(state.services.archive.select_all(&query).await)
}

/// Clear the archive selection
#[utoipa::path(
    delete,
    path = "/reports/selection",
    tag = "reports",
    responses(
        (status = 204, description = "Selection cleared")
    )
)]
pub async fn clear_report_selection(State(state): State<crate::AppState>) -> StatusCode {
    state.services.archive.clear_selection().await;
    StatusCode::NO_CONTENT
}
