//! Equipment record model and query types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::enums::{Severity, StatusOutcome};

/// One physical piece of PPE in the registry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipmentRecord {
    pub id: Uuid,
    /// Unique identifier of the physical item
    pub serial_number: String,
    pub model: String,
    pub description: String,
    pub manufacturer: String,
    /// Applicable norm/standard, e.g. "EN 362"
    pub norm: String,
    pub year_of_manufacture: String,
    pub last_inspection: NaiveDate,
    pub next_inspection: NaiveDate,
    pub status: StatusOutcome,
    /// Inspector responsible for the last inspection
    pub inspector: String,
    /// Assigned user or storage location
    pub assigned_to: String,
}

impl EquipmentRecord {
    pub fn severity(&self) -> Severity {
        self.status.severity()
    }

    /// Snapshot of the attributes copied into a draft item at add-time
    pub fn facts(&self) -> EquipmentFacts {
        EquipmentFacts {
            model: self.model.clone(),
            manufacturer: self.manufacturer.clone(),
            norm: self.norm.clone(),
            year_of_manufacture: self.year_of_manufacture.clone(),
        }
    }
}

/// Lookup-service contract: the attributes resolvable from a serial number
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentFacts {
    pub model: String,
    pub manufacturer: String,
    pub norm: String,
    pub year_of_manufacture: String,
}

/// Registry list query: free-text search AND optional status filter
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct EquipmentQuery {
    /// Case-insensitive substring match on model, serial number or description
    pub search: Option<String>,
    pub status: Option<StatusOutcome>,
}

impl EquipmentQuery {
    /// Search/filter predicate shared by list and select-all
    pub fn matches(&self, record: &EquipmentRecord) -> bool {
        let matches_search = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                record.model.to_lowercase().contains(&term)
                    || record.serial_number.to_lowercase().contains(&term)
                    || record.description.to_lowercase().contains(&term)
            }
        };
        let matches_status = self.status.map_or(true, |s| record.status == s);
        matches_search && matches_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(serial: &str, model: &str, status: StatusOutcome) -> EquipmentRecord {
        EquipmentRecord {
            id: Uuid::new_v4(),
            serial_number: serial.to_string(),
            model: model.to_string(),
            description: "Alukarabiner".to_string(),
            manufacturer: "Petzl".to_string(),
            norm: "EN 362".to_string(),
            year_of_manufacture: "2020".to_string(),
            last_inspection: NaiveDate::from_ymd_opt(2019, 1, 27).unwrap(),
            next_inspection: NaiveDate::from_ymd_opt(2025, 1, 27).unwrap(),
            status,
            inspector: "Max Mustermann".to_string(),
            assigned_to: "Materiallager Schrank".to_string(),
        }
    }

    #[test]
    fn search_is_case_insensitive_over_all_fields() {
        let rec = record("09255VA2127", "Petzl OK", StatusOutcome::Good);
        for term in ["petzl ok", "09255va", "alukarabiner"] {
            let query = EquipmentQuery {
                search: Some(term.to_string()),
                status: None,
            };
            assert!(query.matches(&rec), "term {:?} should match", term);
        }
        let query = EquipmentQuery {
            search: Some("edelrid".to_string()),
            status: None,
        };
        assert!(!query.matches(&rec));
    }

    #[test]
    fn record_severity_follows_the_shared_taxonomy() {
        for status in StatusOutcome::ALL {
            let rec = record("SN", "Model", status);
            assert_eq!(rec.severity(), status.severity());
        }
    }

    #[test]
    fn status_filter_ands_with_search() {
        let rec = record("1104", "Edelrid Abseilachter", StatusOutcome::Monitor);
        let query = EquipmentQuery {
            search: Some("edelrid".to_string()),
            status: Some(StatusOutcome::Good),
        };
        assert!(!query.matches(&rec));
        let query = EquipmentQuery {
            search: Some("".to_string()),
            status: Some(StatusOutcome::Monitor),
        };
        assert!(query.matches(&rec));
    }
}
