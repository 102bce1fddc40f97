//! Equipment registry endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{equipment::EquipmentQuery, EquipmentFacts, EquipmentRecord},
    services::registry::EquipmentPage,
};

/// Toggle selection of one registry row
#[derive(Debug, Deserialize, ToSchema)]
pub struct EquipmentSelectionUpdate {
    pub serial_number: String,
    pub selected: bool,
}

/// List equipment, filtered by search term and status
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Filtered equipment page", body = EquipmentPage)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<EquipmentQuery>,
) -> Json<EquipmentPage> {
    Json(state.services.registry.list(&query).await)
}

/// Get one equipment record by serial number
#[utoipa::path(
    get,
    path = "/equipment/{serial}",
    tag = "equipment",
    params(("serial" = String, Path, description = "Serial number")),
    responses(
        (status = 200, description = "Equipment record", body = EquipmentRecord),
        (status = 404, description = "Unknown serial number")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(serial): Path<String>,
) -> AppResult<Json<EquipmentRecord>> {
    Ok(Json(state.services.registry.get(&serial).await?))
}

/// Resolve a serial number to its equipment attributes
#[utoipa::path(
    get,
    path = "/equipment/{serial}/facts",
    tag = "equipment",
    params(("serial" = String, Path, description = "Serial number")),
    responses(
        (status = 200, description = "Equipment attributes", body = EquipmentFacts),
        (status = 404, description = "Unknown serial number")
    )
)]
pub async fn get_equipment_facts(
    State(state): State<crate::AppState>,
    Path(serial): Path<String>,
) -> AppResult<Json<EquipmentFacts>> {
    Ok(Json(state.services.registry.facts(&serial).await?))
}

/// Toggle one row in the registry selection
#[utoipa::path(
    put,
    path = "/equipment/selection",
    tag = "equipment",
    request_body = EquipmentSelectionUpdate,
    responses(
        (status = 204, description = "Selection updated")
    )
)]
pub async fn update_equipment_selection(
    State(state): State<crate::AppState>,
    Json(update): Json<EquipmentSelectionUpdate>,
) -> StatusCode {
    state
        .services
        .registry
        .set_selected(update.serial_number, update.selected)
        .await;
    StatusCode::NO_CONTENT
}

/// Select every row visible under the given filters
#[utoipa::path(
    post,
    path = "/equipment/selection/all",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Serial numbers now selected", body = Vec<String>)
    )
)]
pub async fn select_all_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<EquipmentQuery>,
) -> Json<Vec<String>> {
    Json(state.services.registry.select_all(&query).await)
}

/// Clear the registry selection
#[utoipa::path(
    delete,
    path = "/equipment/selection",
    tag = "equipment",
    responses(
        (status = 204, description = "Selection cleared")
    )
)]
pub async fn clear_equipment_selection(State(state): State<crate::AppState>) -> StatusCode {
    state.services.registry.clear_selection().await;
    StatusCode::NO_CONTENT
}
