//! Dashboard statistics derived from the registry and the archive

use chrono::{Datelike, Days, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::{ReportStatus, StatusOutcome},
    repository::Repository,
};

/// Headline numbers for the dashboard cards
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct DashboardStats {
    /// Equipment not yet discarded
    pub active_equipment: usize,
    /// Inspections due within the next 30 days
    pub due_within_30_days: usize,
    /// Inspections whose due date has passed
    pub overdue: usize,
    /// Reports completed in the current calendar year
    pub completed_this_year: usize,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn dashboard(&self) -> DashboardStats {
        self.dashboard_at(Utc::now().date_naive()).await
    }

    /// Stats relative to an explicit reference date
    pub async fn dashboard_at(&self, today: NaiveDate) -> DashboardStats {
        let horizon = today + Days::new(30);
        let equipment = self.repository.equipment.list().await;
        let reports = self.repository.reports.list().await;

        DashboardStats {
            active_equipment: equipment
                .iter()
                .filter(|e| e.status != StatusOutcome::Discard)
                .count(),
            due_within_30_days: equipment
                .iter()
                .filter(|e| e.next_inspection >= today && e.next_inspection <= horizon)
                .count(),
            overdue: equipment
                .iter()
                .filter(|e| e.next_inspection < today)
                .count(),
            completed_this_year: reports
                .iter()
                .filter(|r| r.status == ReportStatus::Completed && r.date.year() == today.year())
                .count(),
        }
    }
}
