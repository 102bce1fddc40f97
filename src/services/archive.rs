//! Report archive read view: search, status/year filters, row selection

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{report::ReportQuery, InspectionReport},
    repository::Repository,
    services::selection::Selection,
};

/// Filtered archive page plus the view's reconciled selection
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportPage {
    pub items: Vec<InspectionReport>,
    pub total: usize,
    /// Selected report ids, restricted to the visible rows
    pub selected: Vec<Uuid>,
}

#[derive(Clone)]
pub struct ArchiveService {
    repository: Repository,
    selection: Arc<RwLock<Selection<Uuid>>>,
}

impl ArchiveService {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            selection: Arc::new(RwLock::new(Selection::default())),
        }
    }

    pub async fn list(&self, query: &ReportQuery) -> ReportPage {
        let all = self.repository.reports.list().await;
        let total = all.len();
        let items: Vec<InspectionReport> =
            all.into_iter().filter(|r| query.matches(r)).collect();
        let visible: Vec<Uuid> = items.iter().map(|r| r.id).collect();
        let selected = self.selection.write().await.reconcile(&visible);
        ReportPage {
            items,
            total,
            selected,
        }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<InspectionReport> {
        self.repository.reports.get_by_id(id).await
    }

    pub async fn set_selected(&self, id: Uuid, selected: bool) {
        self.selection.write().await.set(id, selected);
    }

    pub async fn select_all(&self, query: &ReportQuery) -> Vec<Uuid> {
        let visible: Vec<Uuid> = self
            .repository
            .reports
            .list()
            .await
            .into_iter()
            .filter(|r| query.matches(r))
            .map(|r| r.id)
            .collect();
        let mut selection = self.selection.write().await;
        selection.select_all(visible.iter().cloned());
        visible
    }

    pub async fn clear_selection(&self) {
        self.selection.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportStatus;

    fn service() -> ArchiveService {
        ArchiveService::new(Repository::with_seed_data())
    }

    #[tokio::test]
    async fn search_and_status_and_year_combine_with_and() {
        let service = service();
        let query = ReportQuery {
            search: Some("mustermann".to_string()),
            status: Some(ReportStatus::Completed),
            year: Some(2024),
        };
        let page = service.list(&query).await;
        assert_eq!(page.items.len(), 2);
        assert!(page
            .items
            .iter()
            .all(|r| r.status == ReportStatus::Completed));
    }

    #[tokio::test]
    async fn draft_reports_are_filterable() {
        let service = service();
        let query = ReportQuery {
            status: Some(ReportStatus::Draft),
            ..Default::default()
        };
        let page = service.list(&query).await;
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].report_number, "PSA-2024-003");
    }

    #[tokio::test]
    async fn selection_is_scoped_to_visible_reports() {
        let service = service();
        service.select_all(&ReportQuery::default()).await;

        let query = ReportQuery {
            status: Some(ReportStatus::Draft),
            ..Default::default()
        };
        let page = service.list(&query).await;
        assert_eq!(page.selected.len(), 1);
        assert_eq!(page.selected[0], page.items[0].id);
    }
}
