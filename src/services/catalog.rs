//! Catalog management service (books and copies)

use validator::Validate;

use super::SharedRepository;
use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook},
        copy::{BookCopy, CopyStatus, CreateCopy},
    },
};

#[derive(Clone)]
pub struct CatalogService {
    repository: SharedRepository,
}

impl CatalogService {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    /// Register a new book
    pub fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        data.validate()?;
        let book = self.repository.write().books_create(data.into())?;
        tracing::info!(book_id = %book.id, "Book registered");
        Ok(book)
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.repository.read().books_list()
    }

    pub fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.read().books_get(id).cloned()
    }

    /// Search books by author name (partial, case-insensitive)
    pub fn search_by_author(&self, name: &str) -> Vec<Book> {
        self.repository.read().books_by_author(name)
    }

    /// Add a copy of an existing book
    pub fn create_copy(&self, data: CreateCopy) -> AppResult<BookCopy> {
        data.validate()?;
        let copy = self.repository.write().copies_create(data.into())?;
        tracing::info!(copy_id = %copy.id, book_id = %copy.book_id, "Copy added");
        Ok(copy)
    }

    pub fn list_copies(&self) -> Vec<BookCopy> {
        self.repository.read().copies_list()
    }

    pub fn get_copy(&self, id: &str) -> AppResult<BookCopy> {
        self.repository.read().copies_get(id).cloned()
    }

    /// Get copies for a book
    pub fn get_book_copies(&self, book_id: &str) -> AppResult<Vec<BookCopy>> {
        self.repository.read().copies_by_book(book_id)
    }

    /// Administrative status change, outside the loan lifecycle
    pub fn update_copy_status(&self, id: &str, status: CopyStatus) -> AppResult<BookCopy> {
        let copy = self.repository.write().copies_update_status(id, status)?;
        tracing::info!(copy_id = %id, %status, "Copy status updated");
        Ok(copy)
    }
}
