//! Inspection report archive store

use std::sync::Arc;

use chrono::NaiveDate;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{InspectionReport, OutcomeCounts, ReportStatus},
};

#[derive(Clone, Default)]
pub struct ReportsRepository {
    store: Arc<RwLock<IndexMap<Uuid, InspectionReport>>>,
}

impl ReportsRepository {
    pub fn with_records(records: Vec<InspectionReport>) -> Self {
        let store = records.into_iter().map(|r| (r.id, r)).collect();
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn list(&self) -> Vec<InspectionReport> {
        self.store.read().await.values().cloned().collect()
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<InspectionReport> {
        self.store
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Store a finalized or saved report
    pub async fn insert(&self, report: InspectionReport) -> AppResult<InspectionReport> {
        let mut store = self.store.write().await;
        if store
            .values()
            .any(|r| r.report_number == report.report_number)
        {
            return Err(AppError::Persistence(format!(
                "Report number {} already archived",
                report.report_number
            )));
        }
        store.insert(report.id, report.clone());
        Ok(report)
    }

    /// Next free report number for the given year, continuing the sequence
    /// already present in the archive. Format: `{prefix}-{year}-{seq:03}`.
    pub async fn next_report_number(&self, prefix: &str, year: i32) -> String {
        let stem = format!("{}-{}-", prefix, year);
        let max_seq = self
            .store
            .read()
            .await
            .values()
            .filter_map(|r| r.report_number.strip_prefix(&stem))
            .filter_map(|seq| seq.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("{}{:03}", stem, max_seq + 1)
    }
}

/// Demo archive records (from the original mock report list)
pub fn seed_records() -> Vec<InspectionReport> {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
    }

    vec![
        InspectionReport {
            id: Uuid::new_v4(),
            report_number: "PSA-2024-001".to_string(),
            date: date(2024, 1, 15),
            inspector: "Max Mustermann".to_string(),
            user_name: "Materiallager Schrank".to_string(),
            equipment_count: 12,
            status: ReportStatus::Completed,
            results: OutcomeCounts {
                good: 10,
                monitor: 2,
                repair: 0,
                discard: 0,
            },
        },
        InspectionReport {
            id: Uuid::new_v4(),
            report_number: "PSA-2024-002".to_string(),
            date: date(2024, 1, 18),
            inspector: "Max Mustermann".to_string(),
            user_name: "FAM Team".to_string(),
            equipment_count: 8,
            status: ReportStatus::Completed,
            results: OutcomeCounts {
                good: 6,
                monitor: 1,
                repair: 1,
                discard: 0,
            },
        },
        InspectionReport {
            id: Uuid::new_v4(),
            report_number: "PSA-2024-003".to_string(),
            date: date(2024, 1, 22),
            inspector: "Max Mustermann".to_string(),
            user_name: "Luftrettung".to_string(),
            equipment_count: 15,
            status: ReportStatus::Draft,
            results: OutcomeCounts {
                good: 12,
                monitor: 2,
                repair: 0,
                discard: 1,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn report_numbers_continue_the_year_sequence() {
        let repo = ReportsRepository::with_records(seed_records());
        assert_eq!(repo.next_report_number("PSA", 2024).await, "PSA-2024-004");
        // A fresh year starts at 001
        assert_eq!(repo.next_report_number("PSA", 2025).await, "PSA-2025-001");
    }

    #[tokio::test]
    async fn duplicate_report_numbers_are_rejected() {
        let repo = ReportsRepository::with_records(seed_records());
        let mut report = seed_records().remove(0);
        report.id = Uuid::new_v4();
        let err = repo.insert(report).await.unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));
    }
}
