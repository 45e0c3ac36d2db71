//! Repository layer for record storage
//!
//! Every record kind lives in its own [`Store`], keyed by the record's natural
//! identifier. The loan engine only needs get / get_mut / put / list, so any
//! backend implementing [`Store`] can stand in for the in-memory one.

pub mod books;
pub mod copies;
pub mod loans;
pub mod readers;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::models::{Author, Book, BookCopy, CopyStatus, Loan, Reader};

/// A record with a unique string key
pub trait Record: Clone + Send + Sync + 'static {
    fn key(&self) -> &str;
}

impl Record for Book {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Record for BookCopy {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Record for Reader {
    fn key(&self) -> &str {
        &self.email
    }
}

impl Record for Loan {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Keyed storage for one record kind
pub trait Store<T: Record>: Send + Sync {
    fn get(&self, key: &str) -> Option<&T>;

    fn get_mut(&mut self, key: &str) -> Option<&mut T>;

    /// Insert or replace, returning the previous record
    fn put(&mut self, record: T) -> Option<T>;

    /// All records in insertion order
    fn list(&self) -> Vec<&T>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory store preserving insertion order
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: IndexMap<String, T>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }
}

impl<T: Record> Store<T> for MemoryStore<T> {
    fn get(&self, key: &str) -> Option<&T> {
        self.records.get(key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.records.get_mut(key)
    }

    fn put(&mut self, record: T) -> Option<T> {
        self.records.insert(record.key().to_string(), record)
    }

    fn list(&self) -> Vec<&T> {
        self.records.values().collect()
    }
}

/// Main repository struct holding one store per record kind
pub struct Repository {
    pub books: Box<dyn Store<Book>>,
    pub copies: Box<dyn Store<BookCopy>>,
    pub readers: Box<dyn Store<Reader>>,
    pub loans: Box<dyn Store<Loan>>,
}

impl Repository {
    /// Create a repository with the given stores
    pub fn new(
        books: Box<dyn Store<Book>>,
        copies: Box<dyn Store<BookCopy>>,
        readers: Box<dyn Store<Reader>>,
        loans: Box<dyn Store<Loan>>,
    ) -> Self {
        Self {
            books,
            copies,
            readers,
            loans,
        }
    }

    /// Create a repository backed by empty in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Box::<MemoryStore<Book>>::default(),
            Box::<MemoryStore<BookCopy>>::default(),
            Box::<MemoryStore<Reader>>::default(),
            Box::<MemoryStore<Loan>>::default(),
        )
    }

    /// Load the demo catalog: one book with three available copies
    pub fn seed_demo_data(&mut self) {
        let book = Book {
            id: "book_se_somerville".to_string(),
            title: "Software Engineering".to_string(),
            year: 2015,
            author: Author {
                name: "Ian Somerville".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1951, 2, 23).unwrap_or_default(),
            },
        };

        let copies = [
            ("copy1", "8th", "english"),
            ("copy2", "9th", "english"),
            ("copy3", "9th", "spanish"),
        ];

        for (id, edition, language) in copies {
            self.copies.put(BookCopy {
                id: id.to_string(),
                book_id: book.id.clone(),
                status: CopyStatus::Available,
                edition: Some(edition.to_string()),
                language: language.to_string(),
            });
        }

        self.books.put(book);
        tracing::info!("Demo catalog loaded");
    }
}
