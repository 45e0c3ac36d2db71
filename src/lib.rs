//! Biblio Library Lending Server
//!
//! Tracks books, copies, readers and loans behind a REST JSON API, and sends
//! BioAlert notices to readers waiting for a book when a copy comes back.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::{clock::Clock, Services};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the state over a fresh in-memory repository, seeded when the
    /// configuration asks for it
    pub fn new(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        let mut repository = Repository::in_memory();
        if config.seed.demo_data {
            repository.seed_demo_data();
        }

        let services = Services::new(repository, config.loans.clone(), clock);

        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
