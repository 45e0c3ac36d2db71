//! Copy endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::copy::{BookCopy, CreateCopy, UpdateCopyStatus},
    AppState,
};

use super::AppJson;

/// Add a copy of an existing book
#[utoipa::path(
    post,
    path = "/copies",
    tag = "copies",
    request_body = CreateCopy,
    responses(
        (status = 201, description = "Copy created", body = BookCopy),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Copy already exists")
    )
)]
pub async fn create_copy(
    State(state): State<AppState>,
    AppJson(data): AppJson<CreateCopy>,
) -> AppResult<(StatusCode, Json<BookCopy>)> {
    let copy = state.services.catalog.create_copy(data)?;
    Ok((StatusCode::CREATED, Json(copy)))
}

/// List all copies
#[utoipa::path(
    get,
    path = "/copies",
    tag = "copies",
    responses(
        (status = 200, description = "All copies", body = Vec<BookCopy>)
    )
)]
pub async fn list_copies(State(state): State<AppState>) -> Json<Vec<BookCopy>> {
    Json(state.services.catalog.list_copies())
}

/// Get a copy by ID
#[utoipa::path(
    get,
    path = "/copies/{id}",
    tag = "copies",
    params(
        ("id" = String, Path, description = "Copy ID")
    ),
    responses(
        (status = 200, description = "Copy details", body = BookCopy),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn get_copy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookCopy>> {
    Ok(Json(state.services.catalog.get_copy(&id)?))
}

/// Change the status of a copy
#[utoipa::path(
    put,
    path = "/copies/{id}/status",
    tag = "copies",
    params(
        ("id" = String, Path, description = "Copy ID")
    ),
    request_body = UpdateCopyStatus,
    responses(
        (status = 200, description = "Copy updated", body = BookCopy),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn update_copy_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(data): AppJson<UpdateCopyStatus>,
) -> AppResult<Json<BookCopy>> {
    Ok(Json(
        state.services.catalog.update_copy_status(&id, data.status)?,
    ))
}
