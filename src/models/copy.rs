//! Book copy (physical lending unit) model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Copy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CopyStatus {
    Available,
    Loaned,
    Reserved,
    Overdue,
    UnderRepair,
}

impl std::fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CopyStatus::Available => "available",
            CopyStatus::Loaned => "loaned",
            CopyStatus::Reserved => "reserved",
            CopyStatus::Overdue => "overdue",
            CopyStatus::UnderRepair => "under_repair",
        };
        write!(f, "{}", label)
    }
}

fn default_language() -> String {
    "english".to_string()
}

/// Copy of a book
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookCopy {
    pub id: String,
    pub book_id: String,
    pub status: CopyStatus,
    pub edition: Option<String>,
    pub language: String,
}

/// Create copy request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCopy {
    #[validate(length(min = 1, message = "Copy id must not be empty"))]
    pub id: String,
    pub book_id: String,
    pub status: CopyStatus,
    pub edition: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

impl From<CreateCopy> for BookCopy {
    fn from(data: CreateCopy) -> Self {
        Self {
            id: data.id,
            book_id: data.book_id,
            status: data.status,
            edition: data.edition,
            language: data.language,
        }
    }
}

/// Administrative status update
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCopyStatus {
    pub status: CopyStatus,
}
