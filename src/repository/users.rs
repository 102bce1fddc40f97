//! User account store, email-unique

use std::sync::Arc;

use chrono::NaiveDate;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Role, UserAccount, UserStatus},
};

#[derive(Clone, Default)]
pub struct UsersRepository {
    store: Arc<RwLock<IndexMap<Uuid, UserAccount>>>,
}

impl UsersRepository {
    pub fn with_records(records: Vec<UserAccount>) -> Self {
        let store = records.into_iter().map(|u| (u.id, u)).collect();
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn list(&self) -> Vec<UserAccount> {
        self.store.read().await.values().cloned().collect()
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<UserAccount> {
        self.store
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn find_by_email(&self, email: &str) -> Option<UserAccount> {
        let email = email.to_lowercase();
        self.store
            .read()
            .await
            .values()
            .find(|u| u.email.to_lowercase() == email)
            .cloned()
    }

    /// Store a new account; the email must not already be registered
    pub async fn insert(&self, account: UserAccount) -> AppResult<UserAccount> {
        let mut store = self.store.write().await;
        let email = account.email.to_lowercase();
        if store.values().any(|u| u.email.to_lowercase() == email) {
            return Err(AppError::Conflict(format!(
                "A user with email {} already exists",
                account.email
            )));
        }
        store.insert(account.id, account.clone());
        Ok(account)
    }
}

/// Demo directory records (from the original mock user list)
pub fn seed_records() -> Vec<UserAccount> {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
    }

    vec![
        UserAccount {
            id: Uuid::new_v4(),
            name: "Max Mustermann".to_string(),
            email: "max.mustermann@cgh-it.de".to_string(),
            role: Role::Administrator,
            organization: "CGH IT-Solutions".to_string(),
            last_active: date(2024, 3, 15),
            status: UserStatus::Active,
        },
        UserAccount {
            id: Uuid::new_v4(),
            name: "Anna Schmidt".to_string(),
            email: "anna.schmidt@cgh-it.de".to_string(),
            role: Role::Inspector,
            organization: "CGH IT-Solutions".to_string(),
            last_active: date(2024, 3, 14),
            status: UserStatus::Active,
        },
        UserAccount {
            id: Uuid::new_v4(),
            name: "Thomas Weber".to_string(),
            email: "thomas.weber@cgh-it.de".to_string(),
            role: Role::Viewer,
            organization: "CGH IT-Solutions".to_string(),
            last_active: date(2024, 3, 12),
            status: UserStatus::Inactive,
        },
    ]
}
