//! Shared domain enums and the status/color taxonomy

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Presentation category shared by every view.
///
/// The registry, the draft builder, and the archive all badge the same
/// taxonomy; they must agree on the mapping, so it lives here and nowhere
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Green,
    Yellow,
    Orange,
    Red,
    Blue,
    Gray,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Green => "green",
            Severity::Yellow => "yellow",
            Severity::Orange => "orange",
            Severity::Red => "red",
            Severity::Blue => "blue",
            Severity::Gray => "gray",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StatusOutcome
// ---------------------------------------------------------------------------

/// Inspector's verdict on one piece of equipment.
///
/// Draft items carry `Option<StatusOutcome>`; `None` is the transient
/// "not yet assessed" state and is only valid on an unfinished draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusOutcome {
    Good,
    Monitor,
    Repair,
    Discard,
}

impl StatusOutcome {
    pub const ALL: [StatusOutcome; 4] = [
        StatusOutcome::Good,
        StatusOutcome::Monitor,
        StatusOutcome::Repair,
        StatusOutcome::Discard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusOutcome::Good => "good",
            StatusOutcome::Monitor => "monitor",
            StatusOutcome::Repair => "repair",
            StatusOutcome::Discard => "discard",
        }
    }

    /// Total, stable mapping to the shared color convention
    pub fn severity(&self) -> Severity {
        match self {
            StatusOutcome::Good => Severity::Green,
            StatusOutcome::Monitor => Severity::Yellow,
            StatusOutcome::Repair => Severity::Orange,
            StatusOutcome::Discard => Severity::Red,
        }
    }

    /// Color for an optional outcome; unset renders neutral
    pub fn severity_of(outcome: Option<StatusOutcome>) -> Severity {
        outcome.map(|o| o.severity()).unwrap_or(Severity::Gray)
    }
}

impl std::fmt::Display for StatusOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StatusOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "good" => Ok(StatusOutcome::Good),
            "monitor" => Ok(StatusOutcome::Monitor),
            "repair" => Ok(StatusOutcome::Repair),
            "discard" => Ok(StatusOutcome::Discard),
            _ => Err(format!("Invalid status outcome: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// ReportStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of an inspection report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Completed,
    Draft,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "completed",
            ReportStatus::Draft => "draft",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ReportStatus::Completed => Severity::Green,
            ReportStatus::Draft => Severity::Yellow,
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(ReportStatus::Completed),
            "draft" => Ok(ReportStatus::Draft),
            _ => Err(format!("Invalid report status: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
    Inspector,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Inspector => "inspector",
            Role::Viewer => "viewer",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Role::Administrator => Severity::Red,
            Role::Inspector => Severity::Blue,
            Role::Viewer => Severity::Gray,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "administrator" => Ok(Role::Administrator),
            "inspector" => Ok(Role::Inspector),
            "viewer" => Ok(Role::Viewer),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// UserStatus
// ---------------------------------------------------------------------------

/// Account activity state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn severity(&self) -> Severity {
        match self {
            UserStatus::Active => Severity::Green,
            UserStatus::Inactive => Severity::Gray,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        };
        write!(f, "{}", label)
    }
}
