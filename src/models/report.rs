//! Inspection report model and archive query types

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::enums::{ReportStatus, Severity, StatusOutcome};

/// Aggregate count of items per outcome within one report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OutcomeCounts {
    pub good: u32,
    pub monitor: u32,
    pub repair: u32,
    pub discard: u32,
}

impl OutcomeCounts {
    pub fn tally(outcomes: impl IntoIterator<Item = StatusOutcome>) -> Self {
        let mut counts = Self::default();
        for outcome in outcomes {
            match outcome {
                StatusOutcome::Good => counts.good += 1,
                StatusOutcome::Monitor => counts.monitor += 1,
                StatusOutcome::Repair => counts.repair += 1,
                StatusOutcome::Discard => counts.discard += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.good + self.monitor + self.repair + self.discard
    }
}

/// Immutable record of a completed (or explicitly saved) inspection session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InspectionReport {
    pub id: Uuid,
    /// Sequential identifier, e.g. "PSA-2024-001"
    pub report_number: String,
    pub date: NaiveDate,
    pub inspector: String,
    pub user_name: String,
    pub equipment_count: u32,
    pub status: ReportStatus,
    pub results: OutcomeCounts,
}

impl InspectionReport {
    pub fn severity(&self) -> Severity {
        self.status.severity()
    }
}

/// Archive list query: free-text search AND optional status and year filters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ReportQuery {
    /// Case-insensitive substring match on report number, inspector or user
    pub search: Option<String>,
    pub status: Option<ReportStatus>,
    /// Calendar year of the report date
    pub year: Option<i32>,
}

impl ReportQuery {
    pub fn matches(&self, report: &InspectionReport) -> bool {
        let matches_search = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                report.report_number.to_lowercase().contains(&term)
                    || report.inspector.to_lowercase().contains(&term)
                    || report.user_name.to_lowercase().contains(&term)
            }
        };
        let matches_status = self.status.map_or(true, |s| report.status == s);
        let matches_year = self.year.map_or(true, |y| report.date.year() == y);
        matches_search && matches_status && matches_year
    }
}
