//! Loan management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        loan::{CreateLoan, Loan, LoanReturn},
        subscription::Notification,
    },
    AppState,
};

use super::AppJson;

/// Return response with penalty and delivered notifications
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    /// Closed loan
    pub loan: Loan,
    /// Suspension days applied to the reader
    pub penalty_days: i64,
    /// BioAlert notifications sent for the book
    pub notifications_sent: Vec<Notification>,
}

impl From<LoanReturn> for ReturnResponse {
    fn from(result: LoanReturn) -> Self {
        Self {
            loan: result.loan,
            penalty_days: result.penalty_days,
            notifications_sent: result.notifications,
        }
    }
}

/// Lend a copy to a reader
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = Loan),
        (status = 400, description = "Copy not available, loan limit reached or reader suspended"),
        (status = 404, description = "Copy or reader not found")
    )
)]
pub async fn create_loan(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateLoan>,
) -> AppResult<(StatusCode, Json<Loan>)> {
    let loan = state
        .services
        .loans
        .create_loan(&request.copy_id, &request.reader_email)?;
    Ok((StatusCode::CREATED, Json(loan)))
}

/// List all loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "All loans", body = Vec<Loan>)
    )
)]
pub async fn list_loans(State(state): State<AppState>) -> Json<Vec<Loan>> {
    Json(state.services.loans.list_loans())
}

/// Get a loan by ID
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = "loans",
    params(
        ("id" = String, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<String>,
) -> AppResult<Json<Loan>> {
    Ok(Json(state.services.loans.get_loan(&loan_id)?))
}

/// Return a borrowed copy
#[utoipa::path(
    post,
    path = "/loans/{id}/return",
    tag = "loans",
    params(
        ("id" = String, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Copy returned", body = ReturnResponse),
        (status = 400, description = "Already returned"),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn return_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<String>,
) -> AppResult<Json<ReturnResponse>> {
    let result = state.services.loans.return_loan(&loan_id)?;
    Ok(Json(result.into()))
}

/// Get loans for a specific reader
#[utoipa::path(
    get,
    path = "/readers/{email}/loans",
    tag = "loans",
    params(
        ("email" = String, Path, description = "Reader email")
    ),
    responses(
        (status = 200, description = "Reader's loans", body = Vec<Loan>),
        (status = 404, description = "Reader not found")
    )
)]
pub async fn get_reader_loans(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<Loan>>> {
    Ok(Json(state.services.loans.get_reader_loans(&email)?))
}
