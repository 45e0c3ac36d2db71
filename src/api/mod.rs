//! API handlers for Biblio REST endpoints

pub mod bioalert;
pub mod books;
pub mod copies;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod readers;

use axum::{
    extract::FromRequest,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections render as [`AppError`] bodies
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/author/:name", get(books::search_by_author))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id/copies", get(books::list_book_copies))
        // Copies
        .route("/copies", get(copies::list_copies).post(copies::create_copy))
        .route("/copies/:id", get(copies::get_copy))
        .route("/copies/:id/status", put(copies::update_copy_status))
        // Readers
        .route("/readers", get(readers::list_readers).post(readers::create_reader))
        .route("/readers/:email", get(readers::get_reader))
        .route("/readers/:email/loans", get(loans::get_reader_loans))
        // Loans
        .route("/loans", get(loans::list_loans).post(loans::create_loan))
        .route("/loans/:id", get(loans::get_loan))
        .route("/loans/:id/return", post(loans::return_loan))
        // BioAlert
        .route(
            "/bioalert/subscriptions",
            get(bioalert::list_subscriptions).post(bioalert::subscribe),
        )
        .with_state(state);

    Router::new()
        .route("/", get(health::root))
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
