//! Book (catalog record) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book author
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub name: String,
    pub birth_date: NaiveDate,
}

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub author: Author,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Book id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub year: i32,
    pub author: Author,
}

impl From<CreateBook> for Book {
    fn from(data: CreateBook) -> Self {
        Self {
            id: data.id,
            title: data.title,
            year: data.year,
            author: data.author,
        }
    }
}

impl Book {
    /// Case-insensitive substring match on the author's name
    pub fn author_matches(&self, needle: &str) -> bool {
        self.author
            .name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}
