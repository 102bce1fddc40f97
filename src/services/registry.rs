//! Equipment registry read view: search, status filter, row selection

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{equipment::EquipmentQuery, EquipmentFacts, EquipmentRecord},
    repository::Repository,
    services::selection::Selection,
};

/// Filtered registry page plus the view's reconciled selection
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentPage {
    pub items: Vec<EquipmentRecord>,
    /// Size of the full record set, before filtering
    pub total: usize,
    /// Selected serial numbers, restricted to the visible rows
    pub selected: Vec<String>,
}

#[derive(Clone)]
pub struct RegistryService {
    repository: Repository,
    selection: Arc<RwLock<Selection<String>>>,
}

impl RegistryService {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            selection: Arc::new(RwLock::new(Selection::default())),
        }
    }

    /// Narrow the registry to the query and reconcile the selection
    /// against the rows that remain visible
    pub async fn list(&self, query: &EquipmentQuery) -> EquipmentPage {
        let all = self.repository.equipment.list().await;
        let total = all.len();
        let items: Vec<EquipmentRecord> =
            all.into_iter().filter(|r| query.matches(r)).collect();
        let visible: Vec<String> = items.iter().map(|r| r.serial_number.clone()).collect();
        let selected = self.selection.write().await.reconcile(&visible);
        EquipmentPage {
            items,
            total,
            selected,
        }
    }

    pub async fn get(&self, serial: &str) -> AppResult<EquipmentRecord> {
        self.repository.equipment.get_by_serial(serial).await
    }

    /// Lookup-service contract: attributes for a serial, `NotFound` on miss
    pub async fn facts(&self, serial: &str) -> AppResult<EquipmentFacts> {
        Ok(self.repository.equipment.get_by_serial(serial).await?.facts())
    }

    pub async fn set_selected(&self, serial: String, selected: bool) {
        self.selection.write().await.set(serial, selected);
    }

    /// Select every row visible under the given query
    pub async fn select_all(&self, query: &EquipmentQuery) -> Vec<String> {
        let visible: Vec<String> = self
            .repository
            .equipment
            .list()
            .await
            .into_iter()
            .filter(|r| query.matches(r))
            .map(|r| r.serial_number)
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
    use crate::models::StatusOutcome;

    fn service() -> RegistryService {
        RegistryService::new(Repository::with_seed_data())
    }

    #[tokio::test]
    async fn filtering_is_idempotent() {
        let service = service();
        let query = EquipmentQuery {
            search: Some("petzl".to_string()),
            status: None,
        };
        let first = service.list(&query).await;
        let second = service.list(&query).await;
        let serials = |page: &EquipmentPage| {
            page.items
                .iter()
                .map(|r| r.serial_number.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(serials(&first), serials(&second));
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total, 3);
    }

    #[tokio::test]
    async fn status_filter_with_empty_search_yields_the_status_subset() {
        let service = service();
        let query = EquipmentQuery {
            search: Some(String::new()),
            status: Some(StatusOutcome::Monitor),
        };
        let page = service.list(&query).await;
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].serial_number, "1104");
    }

    #[tokio::test]
    async fn select_all_covers_only_the_filtered_subset() {
        let service = service();
        let query = EquipmentQuery {
            search: Some("petzl".to_string()),
            status: None,
        };
        let selected = service.select_all(&query).await;
        assert_eq!(selected, vec!["09255VA2127", "132070005"]);
    }

    #[tokio::test]
    async fn filter_change_drops_stale_selections() {
        let service = service();
        service.select_all(&EquipmentQuery::default()).await;

        // Narrow the view to Edelrid only
        let query = EquipmentQuery {
            search: Some("edelrid".to_string()),
            status: None,
        };
        let page = service.list(&query).await;
        assert_eq!(page.selected, vec!["1104"]);

        // Widening again does not resurrect the dropped rows
        let page = service.list(&EquipmentQuery::default()).await;
        assert_eq!(page.selected, vec!["1104"]);
    }
}
