//! Business logic services

pub mod archive;
pub mod directory;
pub mod inspections;
pub mod lookup;
pub mod registry;
pub mod selection;
pub mod stats;

use std::sync::Arc;

use crate::{config::InspectionConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub registry: registry::RegistryService,
    pub inspections: inspections::InspectionsService,
    pub archive: archive::ArchiveService,
    pub directory: directory::DirectoryService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, inspection_config: InspectionConfig) -> Self {
        let lookup = Arc::new(lookup::RegistryLookup::new(repository.clone()));
        Self {
            registry: registry::RegistryService::new(repository.clone()),
            inspections: inspections::InspectionsService::new(
                repository.clone(),
                lookup,
                inspection_config,
            ),
            archive: archive::ArchiveService::new(repository.clone()),
            directory: directory::DirectoryService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
