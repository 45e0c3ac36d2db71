//! Business logic services

pub mod bioalert;
pub mod catalog;
pub mod clock;
pub mod loans;
pub mod readers;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{config::LoansConfig, repository::Repository};

/// Repository shared by all services; writers hold the lock for a whole
/// operation so each request sees and leaves a consistent state.
pub type SharedRepository = Arc<RwLock<Repository>>;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub readers: readers::ReadersService,
    pub loans: loans::LoansService,
    pub bioalert: bioalert::BioAlertService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, loans_config: LoansConfig, clock: Arc<dyn clock::Clock>) -> Self {
        let repository: SharedRepository = Arc::new(RwLock::new(repository));
        let registry = Arc::new(bioalert::BioAlert::new());

        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            readers: readers::ReadersService::new(repository.clone()),
            loans: loans::LoansService::new(
                repository.clone(),
                registry.clone(),
                clock.clone(),
                loans_config.into(),
            ),
            bioalert: bioalert::BioAlertService::new(repository, registry, clock),
        }
    }
}
