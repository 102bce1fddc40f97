//! Equipment lookup collaborator
//!
//! The draft builder resolves serial numbers through this seam instead of
//! reaching into the registry directly, so a deployment can swap in a
//! remote lookup service without touching the builder.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{error::AppResult, models::EquipmentFacts, repository::Repository};

/// Resolves a serial number to equipment attributes; `None` on a miss
#[async_trait]
pub trait EquipmentLookup: Send + Sync {
    async fn lookup(&self, serial: &str) -> AppResult<Option<EquipmentFacts>>;
}

pub type SharedLookup = Arc<dyn EquipmentLookup>;

/// Lookup backed by the in-process equipment registry
#[derive(Clone)]
pub struct RegistryLookup {
    repository: Repository,
}

impl RegistryLookup {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl EquipmentLookup for RegistryLookup {
    async fn lookup(&self, serial: &str) -> AppResult<Option<EquipmentFacts>> {
        Ok(self
            .repository
            .equipment
            .find_by_serial(serial)
            .await
            .map(|record| record.facts()))
    }
}
