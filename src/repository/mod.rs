//! Repository layer: in-memory stores for the single-session deployment
//!
//! There is no database in scope; every store lives for the process
//! lifetime. The layer still owns record identity and uniqueness rules so
//! the services above it stay storage-agnostic.

pub mod drafts;
pub mod equipment;
pub mod reports;
pub mod users;

/// Main repository struct aggregating the per-entity stores
#[derive(Clone, Default)]
pub struct Repository {
    pub equipment: equipment::EquipmentRepository,
    pub reports: reports::ReportsRepository,
    pub users: users::UsersRepository,
    pub drafts: drafts::DraftsRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with the demo records
    pub fn with_seed_data() -> Self {
        Self {
            equipment: equipment::EquipmentRepository::with_records(equipment::seed_records()),
            reports: reports::ReportsRepository::with_records(reports::seed_records()),
            users: users::UsersRepository::with_records(users::seed_records()),
            drafts: drafts::DraftsRepository::default(),
        }
    }
}
