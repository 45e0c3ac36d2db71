//! Loan lifecycle service
//!
//! Creating a loan checks, in order: the copy is available, the reader is
//! under the active-loan limit, and the reader is not inside a suspension
//! window. All checks run against cloned records and nothing is written back
//! until every check has passed, so a rejected request leaves the stores
//! untouched.
//!
//! Returning a loan closes it, frees the copy, applies the late penalty to the
//! reader and fires BioAlert notifications for the copy's book.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::{bioalert::BioAlert, clock::Clock, SharedRepository};
use crate::{
    config::LoansConfig,
    error::{AppError, AppResult},
    models::{CopyStatus, Loan, LoanReturn},
};

/// Lending rules
#[derive(Debug, Clone)]
pub struct LoanPolicy {
    pub loan_duration: Duration,
    pub max_active_loans: usize,
    pub penalty_days_per_late_day: i64,
}

impl LoanPolicy {
    /// Whole days between due and return, truncated; 0 when not late
    pub fn late_days(&self, due_at: DateTime<Utc>, returned_at: DateTime<Utc>) -> i64 {
        if returned_at > due_at {
            (returned_at - due_at).num_days()
        } else {
            0
        }
    }

    pub fn penalty_days(&self, late_days: i64) -> i64 {
        late_days * self.penalty_days_per_late_day
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        LoansConfig::default().into()
    }
}

impl From<LoansConfig> for LoanPolicy {
    fn from(config: LoansConfig) -> Self {
        Self {
            loan_duration: Duration::days(config.loan_duration_days),
            max_active_loans: config.max_active_loans,
            penalty_days_per_late_day: config.penalty_days_per_late_day,
        }
    }
}

fn new_loan_id() -> String {
    format!("loan_{}", Uuid::new_v4().simple())
}

#[derive(Clone)]
pub struct LoansService {
    repository: SharedRepository,
    registry: Arc<BioAlert>,
    clock: Arc<dyn Clock>,
    policy: LoanPolicy,
}

impl LoansService {
    pub fn new(
        repository: SharedRepository,
        registry: Arc<BioAlert>,
        clock: Arc<dyn Clock>,
        policy: LoanPolicy,
    ) -> Self {
        Self {
            repository,
            registry,
            clock,
            policy,
        }
    }

    /// Lend a copy to a reader
    pub fn create_loan(&self, copy_id: &str, reader_email: &str) -> AppResult<Loan> {
        let now = self.clock.now();
        let mut repo = self.repository.write();

        let mut copy = repo.copies_get(copy_id)?.clone();
        let mut reader = repo.readers_get(reader_email)?.clone();

        if copy.status != CopyStatus::Available {
            tracing::debug!(copy_id, status = %copy.status, "Loan refused: copy not available");
            return Err(AppError::InvalidState(format!(
                "Copy {} is not available (status: {})",
                copy_id, copy.status
            )));
        }

        if reader.active_loans.len() >= self.policy.max_active_loans {
            tracing::debug!(reader_email, "Loan refused: active loan limit reached");
            return Err(AppError::LimitExceeded(format!(
                "Reader {} already has {} active loans",
                reader_email, self.policy.max_active_loans
            )));
        }

        if reader.suspension_days > 0 {
            if let Some(until) = reader.suspended_until(now) {
                tracing::debug!(reader_email, %until, "Loan refused: reader suspended");
                return Err(AppError::Suspended { until });
            }
            reader.clear_suspension();
        }

        let loan = Loan {
            id: new_loan_id(),
            copy_id: copy.id.clone(),
            reader_email: reader.email.clone(),
            loaned_at: now,
            due_at: now + self.policy.loan_duration,
            returned_at: None,
            late_days: 0,
        };

        copy.status = CopyStatus::Loaned;
        reader.active_loans.push(loan.id.clone());

        repo.loans.put(loan.clone());
        repo.copies.put(copy);
        repo.readers.put(reader);

        tracing::info!(
            loan_id = %loan.id,
            copy_id,
            reader_email,
            due_at = %loan.due_at,
            "Loan created"
        );
        Ok(loan)
    }

    /// Close a loan, apply any late penalty and notify subscribers of the book
    pub fn return_loan(&self, loan_id: &str) -> AppResult<LoanReturn> {
        let now = self.clock.now();
        let mut repo = self.repository.write();

        let mut loan = repo.loans_get(loan_id)?.clone();
        if loan.is_returned() {
            return Err(AppError::LoanAlreadyReturned {
                loan_id: loan_id.to_string(),
            });
        }

        let mut copy = repo.copies_get(&loan.copy_id)?.clone();
        let mut reader = repo.readers_get(&loan.reader_email)?.clone();

        loan.returned_at = Some(now);

        let mut penalty_days = 0;
        if now > loan.due_at {
            loan.late_days = self.policy.late_days(loan.due_at, now);
            penalty_days = self.policy.penalty_days(loan.late_days);
            reader.suspension_days += penalty_days;
            // A new penalty restarts the window from today rather than
            // extending a running one.
            reader.suspension_end = Some(now + Duration::days(penalty_days));

            tracing::info!(
                loan_id,
                reader_email = %reader.email,
                late_days = loan.late_days,
                penalty_days,
                "Late return penalised"
            );
        }

        copy.status = CopyStatus::Available;
        reader.active_loans.retain(|id| id != &loan.id);
        let book_id = copy.book_id.clone();

        repo.loans.put(loan.clone());
        repo.copies.put(copy);
        repo.readers.put(reader);

        let notifications = self.registry.notify_availability(&book_id, now);

        tracing::info!(loan_id, book_id = %book_id, "Loan returned");
        Ok(LoanReturn {
            loan,
            penalty_days,
            notifications,
        })
    }

    pub fn get_loan(&self, loan_id: &str) -> AppResult<Loan> {
        self.repository.read().loans_get(loan_id).cloned()
    }

    pub fn list_loans(&self) -> Vec<Loan> {
        self.repository.read().loans_list()
    }

    /// Get loans for a reader
    pub fn get_reader_loans(&self, reader_email: &str) -> AppResult<Vec<Loan>> {
        self.repository.read().loans_by_reader(reader_email)
    }
}
