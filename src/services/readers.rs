//! Reader management service

use validator::Validate;

use super::SharedRepository;
use crate::{
    error::AppResult,
    models::reader::{CreateReader, Reader},
};

#[derive(Clone)]
pub struct ReadersService {
    repository: SharedRepository,
}

impl ReadersService {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    /// Register a reader; the email must be valid and unused
    pub fn create_reader(&self, data: CreateReader) -> AppResult<Reader> {
        data.validate()?;
        let reader = self.repository.write().readers_create(data.into())?;
        tracing::info!(email = %reader.email, "Reader registered");
        Ok(reader)
    }

    pub fn list_readers(&self) -> Vec<Reader> {
        self.repository.read().readers_list()
    }

    pub fn get_reader(&self, email: &str) -> AppResult<Reader> {
        self.repository.read().readers_get(email).cloned()
    }
}
