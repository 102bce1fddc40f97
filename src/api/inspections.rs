//! Inspection draft builder endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        inspection::UpdateDraftHeader, InspectionDraft, InspectionDraftItem, InspectionReport,
        StatusOutcome,
    },
    services::inspections::DraftValidation,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddItemRequest {
    pub serial_number: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConditionUpdate {
    pub condition: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OutcomeUpdate {
    pub outcome: StatusOutcome,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NextInspectionUpdate {
    pub next_inspection: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RemarksUpdate {
    pub remarks: String,
}

/// Open a new inspection draft
#[utoipa::path(
    post,
    path = "/inspections",
    tag = "inspections",
    request_body = UpdateDraftHeader,
    responses(
        (status = 201, description = "Draft opened", body = InspectionDraft)
    )
)]
pub async fn create_inspection(
    State(state): State<crate::AppState>,
    Json(header): Json<UpdateDraftHeader>,
) -> (StatusCode, Json<InspectionDraft>) {
    let draft = state.services.inspections.create(header).await;
    (StatusCode::CREATED, Json(draft))
}

/// List open drafts
#[utoipa::path(
    get,
    path = "/inspections",
    tag = "inspections",
    responses(
        (status = 200, description = "Open drafts", body = Vec<InspectionDraft>)
    )
)]
pub async fn list_inspections(
    State(state): State<crate::AppState>,
) -> Json<Vec<InspectionDraft>> {
    Json(state.services.inspections.list().await)
}

/// Get one draft
#[utoipa::path(
    get,
    path = "/inspections/{id}",
    tag = "inspections",
    params(("id" = Uuid, Path, description = "Draft ID")),
    responses(
        (status = 200, description = "Draft", body = InspectionDraft),
        (status = 404, description = "Unknown draft")
    )
)]
pub async fn get_inspection(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<InspectionDraft>> {
    Ok(Json(state.services.inspections.get(id).await?))
}

/// Update the draft header (inspector, user, date)
#[utoipa::path(
    put,
    path = "/inspections/{id}",
    tag = "inspections",
    params(("id" = Uuid, Path, description = "Draft ID")),
    request_body = UpdateDraftHeader,
    responses(
        (status = 200, description = "Updated draft", body = InspectionDraft),
        (status = 404, description = "Unknown draft")
    )
)]
pub async fn update_inspection(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(header): Json<UpdateDraftHeader>,
) -> AppResult<Json<InspectionDraft>> {
    Ok(Json(
        state.services.inspections.update_header(id, header).await?,
    ))
}

/// Discard a draft
#[utoipa::path(
    delete,
    path = "/inspections/{id}",
    tag = "inspections",
    params(("id" = Uuid, Path, description = "Draft ID")),
    responses(
        (status = 204, description = "Draft discarded"),
        (status = 404, description = "Unknown draft")
    )
)]
pub async fn discard_inspection(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.inspections.discard(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add an item to the draft by serial number
#[utoipa::path(
    post,
    path = "/inspections/{id}/items",
    tag = "inspections",
    params(("id" = Uuid, Path, description = "Draft ID")),
    request_body = AddItemRequest,
    responses(
        (status = 201, description = "Item added", body = InspectionDraft),
        (status = 400, description = "Blank serial number"),
        (status = 404, description = "Unknown draft")
    )
)]
pub async fn add_inspection_item(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddItemRequest>,
) -> AppResult<(StatusCode, Json<InspectionDraft>)> {
    let draft = state
        .services
        .inspections
        .add_item(id, &request.serial_number)
        .await?;
    Ok((StatusCode::CREATED, Json(draft)))
}

/// Remove an item from the draft
#[utoipa::path(
    delete,
    path = "/inspections/{id}/items/{item_id}",
    tag = "inspections",
    params(
        ("id" = Uuid, Path, description = "Draft ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Updated draft", body = InspectionDraft),
        (status = 404, description = "Unknown draft or item")
    )
)]
pub async fn remove_inspection_item(
    State(state): State<crate::AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<InspectionDraft>> {
    Ok(Json(
        state.services.inspections.remove_item(id, item_id).await?,
    ))
}

/// Set an item's condition description
#[utoipa::path(
    put,
    path = "/inspections/{id}/items/{item_id}/condition",
    tag = "inspections",
    params(
        ("id" = Uuid, Path, description = "Draft ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    request_body = ConditionUpdate,
    responses(
        (status = 200, description = "Updated item", body = InspectionDraftItem),
        (status = 404, description = "Unknown draft or item")
    )
)]
pub async fn set_item_condition(
    State(state): State<crate::AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
    Json(update): Json<ConditionUpdate>,
) -> AppResult<Json<InspectionDraftItem>> {
    Ok(Json(
        state
            .services
            .inspections
            .set_condition(id, item_id, update.condition)
            .await?,
    ))
}

/// Record an item's inspection outcome
#[utoipa::path(
    put,
    path = "/inspections/{id}/items/{item_id}/outcome",
    tag = "inspections",
    params(
        ("id" = Uuid, Path, description = "Draft ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    request_body = OutcomeUpdate,
    responses(
        (status = 200, description = "Updated item", body = InspectionDraftItem),
        (status = 404, description = "Unknown draft or item")
    )
)]
pub async fn set_item_outcome(
    State(state): State<crate::AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
    Json(update): Json<OutcomeUpdate>,
) -> AppResult<Json<InspectionDraftItem>> {
    Ok(Json(
        state
            .services
            .inspections
            .set_outcome(id, item_id, update.outcome)
            .await?,
    ))
}

/// Set an item's next inspection due date
#[utoipa::path(
    put,
    path = "/inspections/{id}/items/{item_id}/next-inspection",
    tag = "inspections",
    params(
        ("id" = Uuid, Path, description = "Draft ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    request_body = NextInspectionUpdate,
    responses(
        (status = 200, description = "Updated item", body = InspectionDraftItem),
        (status = 404, description = "Unknown draft or item")
    )
)]
pub async fn set_item_next_inspection(
    State(state): State<crate::AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
    Json(update): Json<NextInspectionUpdate>,
) -> AppResult<Json<InspectionDraftItem>> {
    Ok(Json(
        state
            .services
            .inspections
            .set_next_inspection(id, item_id, update.next_inspection)
            .await?,
    ))
}

/// Set an item's remarks
#[utoipa::path(
    put,
    path = "/inspections/{id}/items/{item_id}/remarks",
    tag = "inspections",
    params(
        ("id" = Uuid, Path, description = "Draft ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    request_body = RemarksUpdate,
    responses(
        (status = 200, description = "Updated item", body = InspectionDraftItem),
        (status = 404, description = "Unknown draft or item")
    )
)]
pub async fn set_item_remarks(
    State(state): State<crate::AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
    Json(update): Json<RemarksUpdate>,
) -> AppResult<Json<InspectionDraftItem>> {
    Ok(Json(
        state
            .services
            .inspections
            .set_remarks(id, item_id, update.remarks)
            .await?,
    ))
}

/// Completability verdict and validation messages for the draft
#[utoipa::path(
    get,
    path = "/inspections/{id}/validation",
    tag = "inspections",
    params(("id" = Uuid, Path, description = "Draft ID")),
    responses(
        (status = 200, description = "Validation state", body = DraftValidation),
        (status = 404, description = "Unknown draft")
    )
)]
pub async fn get_inspection_validation(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DraftValidation>> {
    Ok(Json(state.services.inspections.validation(id).await?))
}

/// Finalize the draft into a completed report
#[utoipa::path(
    post,
    path = "/inspections/{id}/complete",
    tag = "inspections",
    params(("id" = Uuid, Path, description = "Draft ID")),
    responses(
        (status = 201, description = "Archived report", body = InspectionReport),
        (status = 404, description = "Unknown draft"),
        (status = 422, description = "Draft is incomplete")
    )
)]
pub async fn complete_inspection(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<InspectionReport>)> {
    let report = state.services.inspections.complete(id).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// Archive the current draft state without closing the draft
#[utoipa::path(
    post,
    path = "/inspections/{id}/save",
    tag = "inspections",
    params(("id" = Uuid, Path, description = "Draft ID")),
    responses(
        (status = 201, description = "Archived draft snapshot", body = InspectionReport),
        (status = 404, description = "Unknown draft")
    )
)]
pub async fn save_inspection(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<InspectionReport>)> {
    let report = state.services.inspections.save_draft(id).await?;
    Ok((StatusCode::CREATED, Json(report)))
}
