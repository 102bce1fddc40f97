//! Inspection draft model: the in-progress report being authored

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::StatusOutcome;
use super::equipment::EquipmentFacts;
use super::report::OutcomeCounts;

/// One line item inside an in-progress inspection.
///
/// Equipment attributes are snapshot-copied at add-time, not live-linked;
/// later registry edits do not touch an open draft.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InspectionDraftItem {
    pub id: Uuid,
    pub serial_number: String,
    pub model: String,
    pub manufacturer: String,
    pub norm: String,
    pub year_of_manufacture: String,
    /// Whether the serial number resolved to a registry record at add-time
    pub matched: bool,
    /// Free-text condition description, required before completion
    pub condition: String,
    /// Unset until the inspector records a verdict
    pub outcome: Option<StatusOutcome>,
    pub next_inspection: NaiveDate,
    pub remarks: String,
}

impl InspectionDraftItem {
    pub fn new(serial_number: String, facts: Option<EquipmentFacts>, next_inspection: NaiveDate) -> Self {
        let matched = facts.is_some();
        let facts = facts.unwrap_or_default();
        Self {
            id: Uuid::new_v4(),
            serial_number,
            model: facts.model,
            manufacturer: facts.manufacturer,
            norm: facts.norm,
            year_of_manufacture: facts.year_of_manufacture,
            matched,
            condition: String::new(),
            outcome: None,
            next_inspection,
            remarks: String::new(),
        }
    }

    /// Both the condition text and a real outcome are required
    pub fn is_assessed(&self) -> bool {
        !self.condition.trim().is_empty() && self.outcome.is_some()
    }
}

/// Session-scoped in-progress inspection report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InspectionDraft {
    pub id: Uuid,
    pub inspector_name: String,
    /// Name of the user or location the inspected equipment belongs to
    pub user_name: String,
    pub inspection_date: NaiveDate,
    pub items: Vec<InspectionDraftItem>,
    pub created_at: DateTime<Utc>,
}

impl InspectionDraft {
    pub fn new(inspector_name: String, inspection_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            inspector_name,
            user_name: String::new(),
            inspection_date,
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Default due date for a newly added item
    pub fn default_next_inspection(&self, months: u32) -> NaiveDate {
        self.inspection_date + Months::new(months)
    }

    pub fn item(&self, item_id: Uuid) -> Option<&InspectionDraftItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: Uuid) -> Option<&mut InspectionDraftItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    /// Removes the item; returns false when no item carries that id
    pub fn remove_item(&mut self, item_id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        self.items.len() != before
    }

    /// Sole gate on the completion action: non-empty item list, non-blank
    /// user name, and every item fully assessed. Pure, no side effects.
    pub fn can_complete(&self) -> bool {
        !self.items.is_empty()
            && !self.user_name.trim().is_empty()
            && self.items.iter().all(InspectionDraftItem::is_assessed)
    }

    /// Ordered human-readable reasons why the draft cannot be completed.
    /// Empty exactly when `can_complete()` holds.
    pub fn validation_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if self.items.is_empty() {
            messages.push("At least one inspection item is required".to_string());
        }
        if self.user_name.trim().is_empty() {
            messages.push("User name is required".to_string());
        }
        if self.items.iter().any(|i| i.condition.trim().is_empty()) {
            messages.push("Condition description is required for every item".to_string());
        }
        if self.items.iter().any(|i| i.outcome.is_none()) {
            messages.push("Result is required for every item".to_string());
        }
        messages
    }

    /// Tally of items per outcome; unset outcomes are not counted
    pub fn outcome_counts(&self) -> OutcomeCounts {
        OutcomeCounts::tally(self.items.iter().filter_map(|i| i.outcome))
    }
}

/// Partial update of the draft header fields
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateDraftHeader {
    pub inspector_name: Option<String>,
    pub user_name: Option<String>,
    pub inspection_date: Option<NaiveDate>,
}
