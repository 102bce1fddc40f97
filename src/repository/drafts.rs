//! In-progress inspection draft store
//!
//! Drafts survive across requests for the process lifetime; an explicit
//! discard or a successful completion removes them.

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::InspectionDraft,
};

#[derive(Clone, Default)]
pub struct DraftsRepository {
    store: Arc<RwLock<IndexMap<Uuid, InspectionDraft>>>,
}

impl DraftsRepository {
    pub async fn list(&self) -> Vec<InspectionDraft> {
        self.store.read().await.values().cloned().collect()
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<InspectionDraft> {
        self.store
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Inspection draft {} not found", id)))
    }

    pub async fn insert(&self, draft: InspectionDraft) -> InspectionDraft {
        self.store.write().await.insert(draft.id, draft.clone());
        draft
    }

    /// Mutate one draft under the store lock; the closure sees the draft
    /// in place, so partial edits cannot be lost between read and write.
    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut InspectionDraft) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut store = self.store.write().await;
        let draft = store
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Inspection draft {} not found", id)))?;
        f(draft)
    }

    /// Remove and return the draft
    pub async fn remove(&self, id: Uuid) -> AppResult<InspectionDraft> {
        self.store
            .write()
            .await
            .shift_remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("Inspection draft {} not found", id)))
    }
}
