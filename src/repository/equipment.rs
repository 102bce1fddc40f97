//! Equipment store, keyed by serial number

use std::sync::Arc;

use chrono::NaiveDate;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{EquipmentRecord, StatusOutcome},
};

#[derive(Clone, Default)]
pub struct EquipmentRepository {
    store: Arc<RwLock<IndexMap<String, EquipmentRecord>>>,
}

impl EquipmentRepository {
    pub fn with_records(records: Vec<EquipmentRecord>) -> Self {
        let store = records
            .into_iter()
            .map(|r| (r.serial_number.clone(), r))
            .collect();
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// List all equipment in registration order
    pub async fn list(&self) -> Vec<EquipmentRecord> {
        self.store.read().await.values().cloned().collect()
    }

    /// Look up a record by serial number; `None` on miss
    pub async fn find_by_serial(&self, serial: &str) -> Option<EquipmentRecord> {
        self.store.read().await.get(serial).cloned()
    }

    /// Get a record by serial number
    pub async fn get_by_serial(&self, serial: &str) -> AppResult<EquipmentRecord> {
        self.find_by_serial(serial)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", serial)))
    }
}

/// Demo registry records (from the original mock inventory)
pub fn seed_records() -> Vec<EquipmentRecord> {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
    }

    vec![
        EquipmentRecord {
            id: Uuid::new_v4(),
            serial_number: "09255VA2127".to_string(),
            model: "Petzl OK".to_string(),
            description: "Alukarabiner".to_string(),
            manufacturer: "Petzl".to_string(),
            norm: "EN 362".to_string(),
            year_of_manufacture: "2020".to_string(),
            last_inspection: date(2019, 1, 27),
            next_inspection: date(2025, 1, 27),
            status: StatusOutcome::Good,
            inspector: "Max Mustermann".to_string(),
            assigned_to: "Materiallager Schrank".to_string(),
        },
        EquipmentRecord {
            id: Uuid::new_v4(),
            serial_number: "1104".to_string(),
            model: "Edelrid Abseilachter".to_string(),
            description: "Abseilgerät".to_string(),
            manufacturer: "Edelrid".to_string(),
            norm: "EN 341".to_string(),
            year_of_manufacture: "2018".to_string(),
            last_inspection: date(2019, 1, 27),
            next_inspection: date(2025, 1, 27),
            status: StatusOutcome::Monitor,
            inspector: "Max Mustermann".to_string(),
            assigned_to: "FAM".to_string(),
        },
        EquipmentRecord {
            id: Uuid::new_v4(),
            serial_number: "132070005".to_string(),
            model: "Petzl OXAN".to_string(),
            description: "Stahlkarabiner".to_string(),
            manufacturer: "Petzl".to_string(),
            norm: "EN 362".to_string(),
            year_of_manufacture: "2020".to_string(),
            last_inspection: date(2019, 2, 25),
            next_inspection: date(2025, 2, 25),
            status: StatusOutcome::Good,
            inspector: "Max Mustermann".to_string(),
            assigned_to: "Luftrettung".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_by_serial_misses_with_not_found() {
        let repo = EquipmentRepository::with_records(seed_records());
        assert!(repo.get_by_serial("09255VA2127").await.is_ok());
        let err = repo.get_by_serial("does-not-exist").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_preserves_registration_order() {
        let repo = EquipmentRepository::with_records(seed_records());
        let serials: Vec<String> = repo
            .list()
            .await
            .into_iter()
            .map(|r| r.serial_number)
            .collect();
        assert_eq!(serials, vec!["09255VA2127", "1104", "132070005"]);
    }
}
