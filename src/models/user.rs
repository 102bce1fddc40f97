//! User account model and directory query types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::{Role, UserStatus};

/// One user account in the directory
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserAccount {
    pub id: Uuid,
    pub name: String,
    /// Unique across the directory
    pub email: String,
    pub role: Role,
    pub organization: String,
    pub last_active: NaiveDate,
    pub status: UserStatus,
}

/// Request body for creating a user account
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    pub role: Role,
    #[validate(length(min = 1, message = "Organization is required"))]
    pub organization: String,
}

/// Directory list query: free-text search AND optional role filter
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct UserQuery {
    /// Case-insensitive substring match on name or email
    pub search: Option<String>,
    pub role: Option<Role>,
}

impl UserQuery {
    pub fn matches(&self, user: &UserAccount) -> bool {
        let matches_search = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                user.name.to_lowercase().contains(&term)
                    || user.email.to_lowercase().contains(&term)
            }
        };
        let matches_role = self.role.map_or(true, |r| user.role == r);
        matches_search && matches_role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str, email: &str, role: Role) -> UserAccount {
        UserAccount {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            organization: "CGH IT-Solutions".to_string(),
            last_active: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: UserStatus::Active,
        }
    }

    #[test]
    fn search_matches_name_or_email() {
        let user = account("Anna Schmidt", "anna.schmidt@cgh-it.de", Role::Inspector);
        for term in ["anna", "SCHMIDT", "cgh-it.de"] {
            let query = UserQuery {
                search: Some(term.to_string()),
                role: None,
            };
            assert!(query.matches(&user), "term {:?} should match", term);
        }
    }

    #[test]
    fn role_filter_ands_with_search() {
        let user = account("Thomas Weber", "thomas.weber@cgh-it.de", Role::Viewer);
        let query = UserQuery {
            search: Some("weber".to_string()),
            role: Some(Role::Administrator),
        };
        assert!(!query.matches(&user));
    }

    #[test]
    fn create_user_rejects_bad_email() {
        let request = CreateUser {
            name: "New User".to_string(),
            email: "not-an-email".to_string(),
            role: Role::Viewer,
            organization: "CGH IT-Solutions".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
