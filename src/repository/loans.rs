//! Loan domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult, EntityKind},
    models::Loan,
};

impl Repository {
    pub fn loans_get(&self, id: &str) -> AppResult<&Loan> {
        self.loans
            .get(id)
            .ok_or_else(|| AppError::not_found(EntityKind::Loan, id))
    }

    pub fn loans_list(&self) -> Vec<Loan> {
        self.loans.list().into_iter().cloned().collect()
    }

    /// All loans (active and returned) of a reader; the reader must exist
    pub fn loans_by_reader(&self, email: &str) -> AppResult<Vec<Loan>> {
        self.readers_get(email)?;
        Ok(self
            .loans
            .list()
            .into_iter()
            .filter(|loan| loan.reader_email == email)
            .cloned()
            .collect())
    }
}
