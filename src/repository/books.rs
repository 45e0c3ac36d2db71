//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult, EntityKind},
    models::Book,
};

impl Repository {
    pub fn books_get(&self, id: &str) -> AppResult<&Book> {
        self.books
            .get(id)
            .ok_or_else(|| AppError::not_found(EntityKind::Book, id))
    }

    pub fn books_list(&self) -> Vec<Book> {
        self.books.list().into_iter().cloned().collect()
    }

    /// Books whose author name contains `name`, case-insensitively
    pub fn books_by_author(&self, name: &str) -> Vec<Book> {
        self.books
            .list()
            .into_iter()
            .filter(|book| book.author_matches(name))
            .cloned()
            .collect()
    }

    /// Register a new book; ids are unique
    pub fn books_create(&mut self, book: Book) -> AppResult<Book> {
        if self.books.contains(&book.id) {
            return Err(AppError::Conflict(format!("Book {} already exists", book.id)));
        }
        self.books.put(book.clone());
        Ok(book)
    }
}
