//! Copy domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult, EntityKind},
    models::{BookCopy, CopyStatus},
};

impl Repository {
    pub fn copies_get(&self, id: &str) -> AppResult<&BookCopy> {
        self.copies
            .get(id)
            .ok_or_else(|| AppError::not_found(EntityKind::Copy, id))
    }

    pub fn copies_list(&self) -> Vec<BookCopy> {
        self.copies.list().into_iter().cloned().collect()
    }

    /// Copies of a book; the book must exist
    pub fn copies_by_book(&self, book_id: &str) -> AppResult<Vec<BookCopy>> {
        self.books_get(book_id)?;
        Ok(self
            .copies
            .list()
            .into_iter()
            .filter(|copy| copy.book_id == book_id)
            .cloned()
            .collect())
    }

    /// Add a copy of an existing book; ids are unique
    pub fn copies_create(&mut self, copy: BookCopy) -> AppResult<BookCopy> {
        if self.copies.contains(&copy.id) {
            return Err(AppError::Conflict(format!("Copy {} already exists", copy.id)));
        }
        self.books_get(&copy.book_id)?;
        self.copies.put(copy.clone());
        Ok(copy)
    }

    pub fn copies_update_status(&mut self, id: &str, status: CopyStatus) -> AppResult<BookCopy> {
        let copy = self
            .copies
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(EntityKind::Copy, id))?;
        copy.status = status;
        Ok(copy.clone())
    }
}
