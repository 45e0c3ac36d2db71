//! Loan model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::subscription::Notification;

/// Loan of one copy to one reader
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Loan {
    pub id: String,
    pub copy_id: String,
    pub reader_email: String,
    pub loaned_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub late_days: i64,
}

impl Loan {
    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }
}

/// Create loan request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLoan {
    pub copy_id: String,
    pub reader_email: String,
}

/// Result of returning a loan
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoanReturn {
    pub loan: Loan,
    /// Suspension days applied to the reader (0 when returned on time)
    pub penalty_days: i64,
    pub notifications: Vec<Notification>,
}
