//! Inspection draft builder service
//!
//! Owns the authoring workflow: accumulate items into a draft, edit them
//! field by field, derive completability, and finalize into an archived
//! report.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    config::InspectionConfig,
    error::{AppError, AppResult},
    models::{
        inspection::UpdateDraftHeader, InspectionDraft, InspectionDraftItem, InspectionReport,
        ReportStatus, StatusOutcome,
    },
    repository::Repository,
    services::lookup::SharedLookup,
};

/// Completability verdict for one draft
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DraftValidation {
    pub can_complete: bool,
    /// Ordered reasons blocking completion; empty iff `can_complete`
    pub messages: Vec<String>,
}

#[derive(Clone)]
pub struct InspectionsService {
    repository: Repository,
    lookup: SharedLookup,
    config: InspectionConfig,
}

impl InspectionsService {
    pub fn new(repository: Repository, lookup: SharedLookup, config: InspectionConfig) -> Self {
        Self {
            repository,
            lookup,
            config,
        }
    }

    /// Open a new draft. Inspector name falls back to the configured
    /// default, the inspection date to today.
    pub async fn create(&self, header: UpdateDraftHeader) -> InspectionDraft {
        let inspector = header
            .inspector_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.config.default_inspector.clone());
        let date = header
            .inspection_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let mut draft = InspectionDraft::new(inspector, date);
        if let Some(user_name) = header.user_name {
            draft.user_name = user_name;
        }
        tracing::info!(draft_id = %draft.id, "Opened inspection draft");
        self.repository.drafts.insert(draft).await
    }

    pub async fn list(&self) -> Vec<InspectionDraft> {
        self.repository.drafts.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<InspectionDraft> {
        self.repository.drafts.get_by_id(id).await
    }

    pub async fn update_header(
        &self,
        id: Uuid,
        header: UpdateDraftHeader,
    ) -> AppResult<InspectionDraft> {
        self.repository
            .drafts
            .update(id, |draft| {
                if let Some(inspector) = header.inspector_name {
                    draft.inspector_name = inspector;
                }
                if let Some(user_name) = header.user_name {
                    draft.user_name = user_name;
                }
                if let Some(date) = header.inspection_date {
                    draft.inspection_date = date;
                }
                Ok(draft.clone())
            })
            .await
    }

    /// Discard the draft; irreversible
    pub async fn discard(&self, id: Uuid) -> AppResult<()> {
        self.repository.drafts.remove(id).await?;
        tracing::info!(draft_id = %id, "Discarded inspection draft");
        Ok(())
    }

    /// Append one item for the given serial number.
    ///
    /// A blank serial is a validation error, not a silent no-op. Known
    /// serials snapshot their registry attributes; unknown serials become
    /// manual-entry items. Duplicate serials within a draft are allowed.
    pub async fn add_item(&self, id: Uuid, serial: &str) -> AppResult<InspectionDraft> {
        let serial = serial.trim();
        if serial.is_empty() {
            return Err(AppError::Validation("Serial number is required".to_string()));
        }

        let facts = self.lookup.lookup(serial).await?;
        if facts.is_none() {
            tracing::debug!(serial, "Serial not in registry, adding as manual entry");
        }

        let months = self.config.next_inspection_months;
        self.repository
            .drafts
            .update(id, move |draft| {
                let due = draft.default_next_inspection(months);
                draft
                    .items
                    .push(InspectionDraftItem::new(serial.to_string(), facts, due));
                Ok(draft.clone())
            })
            .await
    }

    pub async fn remove_item(&self, id: Uuid, item_id: Uuid) -> AppResult<InspectionDraft> {
        self.repository
            .drafts
            .update(id, |draft| {
                if !draft.remove_item(item_id) {
                    return Err(item_not_found(item_id));
                }
                Ok(draft.clone())
            })
            .await
    }

    pub async fn set_condition(
        &self,
        id: Uuid,
        item_id: Uuid,
        condition: String,
    ) -> AppResult<InspectionDraftItem> {
        self.update_item(id, item_id, |item| item.condition = condition)
            .await
    }

    pub async fn set_outcome(
        &self,
        id: Uuid,
        item_id: Uuid,
        outcome: StatusOutcome,
    ) -> AppResult<InspectionDraftItem> {
        self.update_item(id, item_id, |item| item.outcome = Some(outcome))
            .await
    }

    pub async fn set_next_inspection(
        &self,
        id: Uuid,
        item_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<InspectionDraftItem> {
        self.update_item(id, item_id, |item| item.next_inspection = date)
            .await
    }

    pub async fn set_remarks(
        &self,
        id: Uuid,
        item_id: Uuid,
        remarks: String,
    ) -> AppResult<InspectionDraftItem> {
        self.update_item(id, item_id, |item| item.remarks = remarks)
            .await
    }

    /// Mutates exactly one field of exactly one item
    async fn update_item(
        &self,
        id: Uuid,
        item_id: Uuid,
        apply: impl FnOnce(&mut InspectionDraftItem),
    ) -> AppResult<InspectionDraftItem> {
        self.repository
            .drafts
            .update(id, |draft| {
                let item = draft.item_mut(item_id).ok_or_else(|| item_not_found(item_id))?;
                apply(item);
                Ok(item.clone())
            })
            .await
    }

    /// Recomputed from current draft state on every call; no side effects
    pub async fn validation(&self, id: Uuid) -> AppResult<DraftValidation> {
        let draft = self.repository.drafts.get_by_id(id).await?;
        Ok(DraftValidation {
            can_complete: draft.can_complete(),
            messages: draft.validation_messages(),
        })
    }

    /// Finalize the draft into a completed, archived report.
    ///
    /// Fails with the draft's validation messages while it is incomplete;
    /// the draft is only removed after the report has been stored, so a
    /// persistence failure never loses in-progress work.
    pub async fn complete(&self, id: Uuid) -> AppResult<InspectionReport> {
        let draft = self.repository.drafts.get_by_id(id).await?;
        if !draft.can_complete() {
            return Err(AppError::Incomplete(draft.validation_messages()));
        }

        let report = self
            .archive_snapshot(&draft, ReportStatus::Completed)
            .await?;
        self.repository.drafts.remove(id).await?;
        tracing::info!(
            draft_id = %id,
            report_number = %report.report_number,
            "Completed inspection"
        );
        Ok(report)
    }

    /// Archive the current draft state as a draft-status report without
    /// closing the working draft
    pub async fn save_draft(&self, id: Uuid) -> AppResult<InspectionReport> {
        let draft = self.repository.drafts.get_by_id(id).await?;
        let report = self.archive_snapshot(&draft, ReportStatus::Draft).await?;
        tracing::info!(
            draft_id = %id,
            report_number = %report.report_number,
            "Saved inspection draft to archive"
        );
        Ok(report)
    }

    async fn archive_snapshot(
        &self,
        draft: &InspectionDraft,
        status: ReportStatus,
    ) -> AppResult<InspectionReport> {
        let report_number = self
            .repository
            .reports
            .next_report_number(&self.config.report_number_prefix, draft.inspection_date.year())
            .await;
        let report = InspectionReport {
            id: Uuid::new_v4(),
            report_number,
            date: draft.inspection_date,
            inspector: draft.inspector_name.clone(),
            user_name: draft.user_name.clone(),
            equipment_count: draft.items.len() as u32,
            status,
            results: draft.outcome_counts(),
        };
        self.repository.reports.insert(report).await
    }
}

fn item_not_found(item_id: Uuid) -> AppError {
    AppError::NotFound(format!("Inspection item {} not found", item_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::lookup::RegistryLookup;
    use std::sync::Arc;

    fn service() -> (InspectionsService, Repository) {
        let repository = Repository::with_seed_data();
        let lookup = Arc::new(RegistryLookup::new(repository.clone()));
        let service = InspectionsService::new(
            repository.clone(),
            lookup,
            InspectionConfig::default(),
        );
        (service, repository)
    }

    async fn open_draft(service: &InspectionsService, user: &str) -> Uuid {
        let draft = service
            .create(UpdateDraftHeader {
                user_name: Some(user.to_string()),
                inspection_date: NaiveDate::from_ymd_opt(2024, 3, 15),
                ..Default::default()
            })
            .await;
        draft.id
    }

    #[tokio::test]
    async fn add_item_grows_the_draft_by_exactly_one() {
        let (service, _) = service();
        let id = open_draft(&service, "Team A").await;

        let draft = service.add_item(id, "SN-123").await.unwrap();
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].serial_number, "SN-123");
        assert!(draft.items[0].outcome.is_none());

        let draft = service.add_item(id, "SN-456").await.unwrap();
        assert_eq!(draft.items.len(), 2);
        // First item untouched
        assert_eq!(draft.items[0].serial_number, "SN-123");
    }

    #[tokio::test]
    async fn blank_serials_are_rejected_and_leave_the_draft_unchanged() {
        let (service, _) = service();
        let id = open_draft(&service, "Team A").await;

        for serial in ["", "   "] {
            let err = service.add_item(id, serial).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
        assert!(service.get(id).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn known_serials_snapshot_registry_facts() {
        let (service, _) = service();
        let id = open_draft(&service, "Team A").await;

        let draft = service.add_item(id, "09255VA2127").await.unwrap();
        let item = &draft.items[0];
        assert!(item.matched);
        assert_eq!(item.model, "Petzl OK");
        assert_eq!(item.manufacturer, "Petzl");
        assert_eq!(item.norm, "EN 362");
        // Due date defaults to inspection date + 12 months
        assert_eq!(
            item.next_inspection,
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );

        let draft = service.add_item(id, "SN-UNKNOWN").await.unwrap();
        assert!(!draft.items[1].matched);
        assert!(draft.items[1].model.is_empty());
    }

    #[tokio::test]
    async fn end_to_end_single_item_completion_flow() {
        let (service, _) = service();
        let id = open_draft(&service, "Team A").await;

        let draft = service.add_item(id, "SN-123").await.unwrap();
        let item_id = draft.items[0].id;
        assert!(draft.items[0].outcome.is_none());

        let validation = service.validation(id).await.unwrap();
        assert!(!validation.can_complete);

        service
            .set_condition(id, item_id, "Webbing frayed".to_string())
            .await
            .unwrap();
        service
            .set_outcome(id, item_id, StatusOutcome::Repair)
            .await
            .unwrap();

        let validation = service.validation(id).await.unwrap();
        assert!(validation.can_complete);
        assert!(validation.messages.is_empty());
    }

    #[tokio::test]
    async fn validation_names_the_missing_fields_of_a_half_finished_draft() {
        let (service, _) = service();
        let id = open_draft(&service, "Team A").await;

        let draft = service.add_item(id, "SN-1").await.unwrap();
        let first = draft.items[0].id;
        service.add_item(id, "SN-2").await.unwrap();

        service
            .set_condition(id, first, "No damage".to_string())
            .await
            .unwrap();
        service.set_outcome(id, first, StatusOutcome::Good).await.unwrap();

        let validation = service.validation(id).await.unwrap();
        assert!(!validation.can_complete);
        assert_eq!(
            validation.messages,
            vec![
                "Condition description is required for every item",
                "Result is required for every item",
            ]
        );
    }

    #[tokio::test]
    async fn completing_an_incomplete_draft_fails_and_keeps_the_draft() {
        let (service, _) = service();
        let id = open_draft(&service, "").await;
        service.add_item(id, "SN-1").await.unwrap();

        let err = service.complete(id).await.unwrap_err();
        match err {
            AppError::Incomplete(reasons) => {
                assert!(reasons.contains(&"User name is required".to_string()));
            }
            other => panic!("expected Incomplete, got {:?}", other),
        }
        // Draft survived the failed completion
        assert!(service.get(id).await.is_ok());
    }

    #[tokio::test]
    async fn completion_archives_a_numbered_report_and_drops_the_draft() {
        let (service, repository) = service();
        let id = open_draft(&service, "Team A").await;

        for serial in ["SN-1", "SN-2"] {
            let draft = service.add_item(id, serial).await.unwrap();
            let item_id = draft.items.last().unwrap().id;
            service
                .set_condition(id, item_id, "Inspected".to_string())
                .await
                .unwrap();
            service
                .set_outcome(
                    id,
                    item_id,
                    if serial == "SN-1" {
                        StatusOutcome::Good
                    } else {
                        StatusOutcome::Discard
                    },
                )
                .await
                .unwrap();
        }

        let report = service.complete(id).await.unwrap();
        // Seeds end at PSA-2024-003
        assert_eq!(report.report_number, "PSA-2024-004");
        assert_eq!(report.status, ReportStatus::Completed);
        assert_eq!(report.equipment_count, 2);
        assert_eq!(report.results.good, 1);
        assert_eq!(report.results.discard, 1);

        assert!(service.get(id).await.is_err());
        assert!(repository.reports.get_by_id(report.id).await.is_ok());
    }

    #[tokio::test]
    async fn save_draft_archives_a_snapshot_but_keeps_the_working_draft() {
        let (service, _) = service();
        let id = open_draft(&service, "Team A").await;
        service.add_item(id, "SN-1").await.unwrap();

        let report = service.save_draft(id).await.unwrap();
        assert_eq!(report.status, ReportStatus::Draft);
        assert!(service.get(id).await.is_ok());
    }

    #[tokio::test]
    async fn removing_one_item_leaves_the_others_assessable() {
        let (service, _) = service();
        let id = open_draft(&service, "Team A").await;

        let draft = service.add_item(id, "SN-1").await.unwrap();
        let first = draft.items[0].id;
        let draft = service.add_item(id, "SN-2").await.unwrap();
        let second = draft.items[1].id;

        service
            .set_condition(id, second, "ok".to_string())
            .await
            .unwrap();
        service.set_outcome(id, second, StatusOutcome::Good).await.unwrap();

        let draft = service.remove_item(id, first).await.unwrap();
        assert_eq!(draft.items.len(), 1);
        assert!(service.validation(id).await.unwrap().can_complete);

        let err = service.remove_item(id, first).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn setters_touch_exactly_one_field() {
        let (service, _) = service();
        let id = open_draft(&service, "Team A").await;
        let draft = service.add_item(id, "SN-1").await.unwrap();
        let item_id = draft.items[0].id;

        let due = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        service.set_next_inspection(id, item_id, due).await.unwrap();
        let item = service
            .set_remarks(id, item_id, "retired early".to_string())
            .await
            .unwrap();

        assert_eq!(item.next_inspection, due);
        assert_eq!(item.remarks, "retired early");
        assert!(item.condition.is_empty());
        assert!(item.outcome.is_none());
    }
}
