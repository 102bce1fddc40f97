//! User directory: search, role filter, account creation

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        user::{CreateUser, UserQuery},
        UserAccount, UserStatus,
    },
    repository::Repository,
    services::selection::Selection,
};

/// Filtered directory page plus the view's reconciled selection
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserPage {
    pub items: Vec<UserAccount>,
    pub total: usize,
    /// Selected user ids, restricted to the visible rows
    pub selected: Vec<Uuid>,
}

#[derive(Clone)]
pub struct DirectoryService {
    repository: Repository,
    selection: Arc<RwLock<Selection<Uuid>>>,
}

impl DirectoryService {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            selection: Arc::new(RwLock::new(Selection::default())),
        }
    }

    pub async fn list(&self, query: &UserQuery) -> UserPage {
        let all = self.repository.users.list().await;
        let total = all.len();
        let items: Vec<UserAccount> = all.into_iter().filter(|u| query.matches(u)).collect();
        let visible: Vec<Uuid> = items.iter().map(|u| u.id).collect();
        let selected = self.selection.write().await.reconcile(&visible);
        UserPage {
            items,
            total,
            selected,
        }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<UserAccount> {
        self.repository.users.get_by_id(id).await
    }

    /// Create an account; field validation first, then email uniqueness
    pub async fn create(&self, request: CreateUser) -> AppResult<UserAccount> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(existing) = self.repository.users.find_by_email(&request.email).await {
            return Err(AppError::Conflict(format!(
                "A user with email {} already exists",
                existing.email
            )));
        }

        let account = UserAccount {
            id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            role: request.role,
            organization: request.organization.trim().to_string(),
            last_active: Utc::now().date_naive(),
            status: UserStatus::Active,
        };
        let created = self.repository.users.insert(account).await?;
        tracing::info!(user = %created.email, role = %created.role, "Created user account");
        Ok(created)
    }

    pub async fn set_selected(&self, id: Uuid, selected: bool) {
        self.selection.write().await.set(id, selected);
    }

    pub async fn select_all(&self, query: &UserQuery) -> Vec<Uuid> {
        let visible: Vec<Uuid> = self
            .repository
            .users
            .list()
            .await
            .into_iter()
            .filter(|u| query.matches(u))
            .map(|u| u.id)
            .collect();
        let mut selection = self.selection.write().await;
        selection.select_all(visible.iter().cloned());
        visible
    }

    pub async fn clear_selection(&self) {
        self.selection.write().await.clear();
    }
}
