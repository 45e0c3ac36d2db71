//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{bioalert, books, copies, health, loans, readers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblio API",
        version = "1.0.0",
        description = "Library lending REST API with BioAlert availability notifications"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::root,
        health::health_check,
        // Books
        books::create_book,
        books::list_books,
        books::get_book,
        books::search_by_author,
        books::list_book_copies,
        // Copies
        copies::create_copy,
        copies::list_copies,
        copies::get_copy,
        copies::update_copy_status,
        // Readers
        readers::create_reader,
        readers::list_readers,
        readers::get_reader,
        // Loans
        loans::create_loan,
        loans::list_loans,
        loans::get_loan,
        loans::return_loan,
        loans::get_reader_loans,
        // BioAlert
        bioalert::subscribe,
        bioalert::list_subscriptions,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Author,
            crate::models::book::Book,
            crate::models::book::CreateBook,
            // Copies
            crate::models::copy::CopyStatus,
            crate::models::copy::BookCopy,
            crate::models::copy::CreateCopy,
            crate::models::copy::UpdateCopyStatus,
            // Readers
            crate::models::reader::Reader,
            crate::models::reader::CreateReader,
            // Loans
            crate::models::loan::Loan,
            crate::models::loan::CreateLoan,
            loans::ReturnResponse,
            // BioAlert
            crate::models::subscription::Subscription,
            crate::models::subscription::Notification,
            crate::models::subscription::CreateSubscription,
            bioalert::SubscribeResponse,
            // Health
            health::HealthResponse,
            health::RootResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog management"),
        (name = "copies", description = "Copy management"),
        (name = "readers", description = "Reader management"),
        (name = "loans", description = "Loan lifecycle"),
        (name = "bioalert", description = "Availability notifications")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
