//! Reader domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult, EntityKind},
    models::Reader,
};

impl Repository {
    pub fn readers_get(&self, email: &str) -> AppResult<&Reader> {
        self.readers
            .get(email)
            .ok_or_else(|| AppError::not_found(EntityKind::Reader, email))
    }

    pub fn readers_list(&self) -> Vec<Reader> {
        self.readers.list().into_iter().cloned().collect()
    }

    /// Register a new reader; emails are unique
    pub fn readers_create(&mut self, reader: Reader) -> AppResult<Reader> {
        if self.readers.contains(&reader.email) {
            return Err(AppError::Conflict(format!(
                "Reader {} already exists",
                reader.email
            )));
        }
        self.readers.put(reader.clone());
        Ok(reader)
    }
}
