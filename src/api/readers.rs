//! Reader endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::reader::{CreateReader, Reader},
    AppState,
};

use super::AppJson;

/// Register a new reader
#[utoipa::path(
    post,
    path = "/readers",
    tag = "readers",
    request_body = CreateReader,
    responses(
        (status = 201, description = "Reader created", body = Reader),
        (status = 400, description = "Invalid email"),
        (status = 409, description = "Reader already exists")
    )
)]
pub async fn create_reader(
    State(state): State<AppState>,
    AppJson(data): AppJson<CreateReader>,
) -> AppResult<(StatusCode, Json<Reader>)> {
    let reader = state.services.readers.create_reader(data)?;
    Ok((StatusCode::CREATED, Json(reader)))
}

/// List all readers
#[utoipa::path(
    get,
    path = "/readers",
    tag = "readers",
    responses(
        (status = 200, description = "All readers", body = Vec<Reader>)
    )
)]
pub async fn list_readers(State(state): State<AppState>) -> Json<Vec<Reader>> {
    Json(state.services.readers.list_readers())
}

/// Get a reader by email
#[utoipa::path(
    get,
    path = "/readers/{email}",
    tag = "readers",
    params(
        ("email" = String, Path, description = "Reader email")
    ),
    responses(
        (status = 200, description = "Reader details", body = Reader),
        (status = 404, description = "Reader not found")
    )
)]
pub async fn get_reader(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Reader>> {
    Ok(Json(state.services.readers.get_reader(&email)?))
}
