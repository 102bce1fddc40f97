//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, inspections, reports, stats, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PSA-Audit API",
        version = "0.1.0",
        description = "PPE Inspection Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::get_equipment_facts,
        equipment::update_equipment_selection,
        equipment::select_all_equipment,
        equipment::clear_equipment_selection,
        // Inspections
        inspections::create_inspection,
        inspections::list_inspections,
        inspections::get_inspection,
        inspections::update_inspection,
        inspections::discard_inspection,
        inspections::add_inspection_item,
        inspections::remove_inspection_item,
        inspections::set_item_condition,
        inspections::set_item_outcome,
        inspections::set_item_next_inspection,
        inspections::set_item_remarks,
        inspections::get_inspection_validation,
        inspections::complete_inspection,
        inspections::save_inspection,
        // Reports
        reports::list_reports,
        reports::get_report,
        reports::update_report_selection,
        reports::select_all_reports,
        reports::clear_report_selection,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user_selection,
        users::select_all_users,
        users::clear_user_selection,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            // Enums
            crate::models::enums::Severity,
            crate::models::enums::StatusOutcome,
            crate::models::enums::ReportStatus,
            crate::models::enums::Role,
            crate::models::enums::UserStatus,
            // Equipment
            crate::models::equipment::EquipmentRecord,
            crate::models::equipment::EquipmentFacts,
            crate::services::registry::EquipmentPage,
            equipment::EquipmentSelectionUpdate,
            // Inspections
            crate::models::inspection::InspectionDraft,
            crate::models::inspection::InspectionDraftItem,
            crate::models::inspection::UpdateDraftHeader,
            crate::services::inspections::DraftValidation,
            inspections::AddItemRequest,
            inspections::ConditionUpdate,
            inspections::OutcomeUpdate,
            inspections::NextInspectionUpdate,
            inspections::RemarksUpdate,
            // Reports
            crate::models::report::InspectionReport,
            crate::models::report::OutcomeCounts,
            crate::services::archive::ReportPage,
            reports::ReportSelectionUpdate,
            // Users
            crate::models::user::UserAccount,
            crate::models::user::CreateUser,
            crate::services::directory::UserPage,
            users::UserSelectionUpdate,
            // Stats
            crate::services::stats::DashboardStats,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "equipment", description = "Equipment registry"),
        (name = "inspections", description = "Inspection draft builder"),
        (name = "reports", description = "Report archive"),
        (name = "users", description = "User directory"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Swagger UI router serving the generated document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
