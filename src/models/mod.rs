//! Data models for PSA-Audit

pub mod enums;
pub mod equipment;
pub mod inspection;
pub mod report;
pub mod user;

// Re-export commonly used types
pub use enums::{ReportStatus, Role, Severity, StatusOutcome, UserStatus};
pub use equipment::{EquipmentFacts, EquipmentRecord};
pub use inspection::{InspectionDraft, InspectionDraftItem};
pub use report::{InspectionReport, OutcomeCounts};
pub use user::UserAccount;
