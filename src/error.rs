//! Error types for Biblio server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Kind of record a lookup failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Book,
    Copy,
    Reader,
    Loan,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EntityKind::Book => "Book",
            EntityKind::Copy => "Copy",
            EntityKind::Reader => "Reader",
            EntityKind::Loan => "Loan",
        };
        write!(f, "{}", label)
    }
}

/// Application error codes returned in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    NoSuchBook = 1,
    NoSuchCopy = 2,
    NoSuchReader = 3,
    NoSuchLoan = 4,
    CopyNotAvailable = 5,
    MaxLoansReached = 6,
    ReaderSuspended = 7,
    Duplicate = 8,
    BadValue = 9,
    LoanAlreadyReturned = 10,
}

impl From<EntityKind> for ErrorCode {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Book => ErrorCode::NoSuchBook,
            EntityKind::Copy => ErrorCode::NoSuchCopy,
            EntityKind::Reader => ErrorCode::NoSuchReader,
            EntityKind::Loan => ErrorCode::NoSuchLoan,
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{kind} {key} not found")]
    NotFound { kind: EntityKind, key: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("Reader suspended until {until}")]
    Suspended { until: DateTime<Utc> },

    #[error("Loan {loan_id} was already returned")]
    LoanAlreadyReturned { loan_id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        AppError::NotFound {
            kind,
            key: key.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound { kind, .. } => (StatusCode::NOT_FOUND, ErrorCode::from(*kind)),
            AppError::InvalidState(_) => (StatusCode::BAD_REQUEST, ErrorCode::CopyNotAvailable),
            AppError::LimitExceeded(_) => (StatusCode::BAD_REQUEST, ErrorCode::MaxLoansReached),
            AppError::Suspended { .. } => (StatusCode::BAD_REQUEST, ErrorCode::ReaderSuspended),
            AppError::LoanAlreadyReturned { .. } => {
                (StatusCode::BAD_REQUEST, ErrorCode::LoanAlreadyReturned)
            }
            AppError::Conflict(_) => (StatusCode::CONFLICT, ErrorCode::Duplicate),
            AppError::Validation(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue)
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity() {
        let err = AppError::not_found(EntityKind::Copy, "copy1");
        assert_eq!(err.to_string(), "Copy copy1 not found");

        let err = AppError::not_found(EntityKind::Reader, "ana@example.org");
        assert_eq!(err.to_string(), "Reader ana@example.org not found");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::not_found(EntityKind::Loan, "x"), StatusCode::NOT_FOUND),
            (AppError::InvalidState("loaned".into()), StatusCode::BAD_REQUEST),
            (AppError::LimitExceeded("3".into()), StatusCode::BAD_REQUEST),
            (AppError::Suspended { until: Utc::now() }, StatusCode::BAD_REQUEST),
            (
                AppError::LoanAlreadyReturned { loan_id: "x".into() },
                StatusCode::BAD_REQUEST,
            ),
            (AppError::Conflict("dup".into()), StatusCode::CONFLICT),
            (AppError::BadRequest("eof".into()), StatusCode::BAD_REQUEST),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
