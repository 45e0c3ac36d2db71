//! API integration tests

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use biblio_server::{api, config::AppConfig, services::clock::ManualClock, AppState};

const BOOK: &str = "book_se_somerville";

fn app() -> (Router, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
    ));
    let state = AppState::new(AppConfig::default(), clock.clone());
    (api::create_router(state), clock)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn register_reader(app: &Router, email: &str) {
    let (status, _) = send(
        app,
        "POST",
        "/api/v1/readers",
        Some(json!({ "email": email, "name": "Test Reader" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn lend(app: &Router, copy_id: &str, email: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/v1/loans",
        Some(json!({ "copy_id": copy_id, "reader_email": email })),
    )
    .await
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = app();
    let (status, body) = send(&app, "GET", "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_catalog_crud() {
    let (app, _) = app();

    let book = json!({
        "id": "earthsea",
        "title": "A Wizard of Earthsea",
        "year": 1968,
        "author": { "name": "Ursula K. Le Guin", "birth_date": "1929-10-21" }
    });
    let (status, body) = send(&app, "POST", "/api/v1/books", Some(book.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "earthsea");

    let (status, body) = send(&app, "POST", "/api/v1/books", Some(book)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Duplicate");

    let (status, body) = send(&app, "GET", "/api/v1/books/author/le%20GUIN", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/copies",
        Some(json!({ "id": "orphan", "book_id": "missing", "status": "available" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/copies",
        Some(json!({ "id": "es1", "book_id": "earthsea", "status": "available" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["language"], "english");

    let (status, body) = send(&app, "GET", "/api/v1/books/earthsea/copies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        "PUT",
        "/api/v1/copies/es1/status",
        Some(json!({ "status": "under_repair" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "under_repair");

    let (status, body) = send(&app, "GET", "/api/v1/copies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_reader_email_is_validated() {
    let (app, _) = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/readers",
        Some(json!({ "email": "not-an-email", "name": "Nobody" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, body) = send(&app, "GET", "/api/v1/readers/ghost@example.org", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchReader");
}

#[tokio::test]
async fn test_loan_then_second_loan_is_refused() {
    let (app, _) = app();
    register_reader(&app, "ana@example.org").await;

    let (status, loan) = lend(&app, "copy1", "ana@example.org").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(loan["copy_id"], "copy1");

    let (_, copy) = send(&app, "GET", "/api/v1/copies/copy1", None).await;
    assert_eq!(copy["status"], "loaned");

    let (status, body) = lend(&app, "copy1", "ana@example.org").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "CopyNotAvailable");
    assert!(body["message"].as_str().unwrap().contains("loaned"));

    let (status, body) = lend(&app, "copy9", "ana@example.org").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchCopy");

    let (status, body) = lend(&app, "copy2", "ghost@example.org").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchReader");
}

#[tokio::test]
async fn test_fourth_loan_exceeds_limit() {
    let (app, _) = app();
    register_reader(&app, "ana@example.org").await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/copies",
        Some(json!({ "id": "copy4", "book_id": BOOK, "status": "available" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    for copy in ["copy1", "copy2", "copy3"] {
        let (status, _) = lend(&app, copy, "ana@example.org").await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = lend(&app, "copy4", "ana@example.org").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MaxLoansReached");

    let (_, reader) = send(&app, "GET", "/api/v1/readers/ana@example.org", None).await;
    assert_eq!(reader["active_loans"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_late_return_suspends_and_notifies() {
    let (app, clock) = app();
    register_reader(&app, "ana@example.org").await;
    register_reader(&app, "ben@example.org").await;
    register_reader(&app, "cleo@example.org").await;

    let (_, loan) = lend(&app, "copy1", "ana@example.org").await;
    let loan_id = loan["id"].as_str().unwrap().to_string();

    for email in ["ben@example.org", "cleo@example.org"] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/bioalert/subscriptions",
            Some(json!({ "reader_email": email, "book_id": BOOK })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["subscription"]["reader_email"], email);
    }

    let (_, subs) = send(
        &app,
        "GET",
        "/api/v1/bioalert/subscriptions?reader_email=ben@example.org",
        None,
    )
    .await;
    assert_eq!(subs.as_array().unwrap().len(), 1);

    clock.advance(Duration::days(35));
    let (status, body) = send(&app, "POST", &format!("/api/v1/loans/{loan_id}/return"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loan"]["late_days"], 5);
    assert_eq!(body["penalty_days"], 10);
    assert_eq!(body["notifications_sent"].as_array().unwrap().len(), 2);
    assert_eq!(body["notifications_sent"][0]["email"], "ben@example.org");

    let (_, subs) = send(&app, "GET", "/api/v1/bioalert/subscriptions", None).await;
    assert!(subs.as_array().unwrap().is_empty());

    let (_, reader) = send(&app, "GET", "/api/v1/readers/ana@example.org", None).await;
    assert_eq!(reader["suspension_days"], 10);
    assert!(reader["active_loans"].as_array().unwrap().is_empty());

    let (_, copy) = send(&app, "GET", "/api/v1/copies/copy1", None).await;
    assert_eq!(copy["status"], "available");

    let (status, body) = lend(&app, "copy1", "ana@example.org").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ReaderSuspended");

    let (status, body) = send(&app, "POST", &format!("/api/v1/loans/{loan_id}/return"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "LoanAlreadyReturned");
    assert_eq!(body["code"], 10);

    let (status, loans) = send(&app, "GET", "/api/v1/readers/ana@example.org/loans", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(loans.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_subscribe_unknown_book() {
    let (app, _) = app();
    register_reader(&app, "ana@example.org").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/bioalert/subscriptions",
        Some(json!({ "reader_email": "ana@example.org", "book_id": "missing" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchBook");
}

#[tokio::test]
async fn test_unknown_loan_returns_not_found() {
    let (app, _) = app();
    let (status, body) = send(&app, "POST", "/api/v1/loans/loan_missing/return", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchLoan");
}

#[tokio::test]
async fn test_malformed_loan_body_is_bad_value() {
    let (app, _) = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/loans",
        Some(json!({ "copy_id": "copy1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"].as_str().unwrap().starts_with("Bad request"));

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/loans")
        .header("content-type", "application/json")
        .body(Body::from("{\"copy_id\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], 9);
}

#[tokio::test]
async fn test_empty_reader_filter_lists_all_subscriptions() {
    let (app, _) = app();
    register_reader(&app, "ana@example.org").await;
    register_reader(&app, "ben@example.org").await;

    for email in ["ana@example.org", "ben@example.org"] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/bioalert/subscriptions",
            Some(json!({ "reader_email": email, "book_id": BOOK })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, subs) = send(&app, "GET", "/api/v1/bioalert/subscriptions?reader_email=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(subs.as_array().unwrap().len(), 2);
}
