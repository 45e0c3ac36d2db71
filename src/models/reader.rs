//! Reader (borrower) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Reader record, keyed by email
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Reader {
    pub email: String,
    pub name: String,
    /// Ids of loans not yet returned, oldest first
    pub active_loans: Vec<String>,
    pub suspension_days: i64,
    pub suspension_end: Option<DateTime<Utc>>,
}

impl Reader {
    /// End of the suspension window covering `now`, if any
    pub fn suspended_until(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if self.suspension_days <= 0 {
            return None;
        }
        self.suspension_end.filter(|end| now < *end)
    }

    pub fn clear_suspension(&mut self) {
        self.suspension_days = 0;
        self.suspension_end = None;
    }
}

/// Create reader request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReader {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

impl From<CreateReader> for Reader {
    fn from(data: CreateReader) -> Self {
        Self {
            email: data.email,
            name: data.name,
            active_loans: Vec::new(),
            suspension_days: 0,
            suspension_end: None,
        }
    }
}
