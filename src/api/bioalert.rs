//! BioAlert subscription endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::subscription::{CreateSubscription, Subscription, SubscriptionQuery},
    AppState,
};

use super::AppJson;

#[derive(Serialize, ToSchema)]
pub struct SubscribeResponse {
    pub message: String,
    pub subscription: Subscription,
}

/// Subscribe a reader to availability notices for a book
#[utoipa::path(
    post,
    path = "/bioalert/subscriptions",
    tag = "bioalert",
    request_body = CreateSubscription,
    responses(
        (status = 201, description = "Subscription created", body = SubscribeResponse),
        (status = 404, description = "Reader or book not found")
    )
)]
pub async fn subscribe(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateSubscription>,
) -> AppResult<(StatusCode, Json<SubscribeResponse>)> {
    let subscription = state
        .services
        .bioalert
        .subscribe(&request.reader_email, &request.book_id)?;

    Ok((
        StatusCode::CREATED,
        Json(SubscribeResponse {
            message: "Subscription created".to_string(),
            subscription,
        }),
    ))
}

/// List active subscriptions
#[utoipa::path(
    get,
    path = "/bioalert/subscriptions",
    tag = "bioalert",
    params(SubscriptionQuery),
    responses(
        (status = 200, description = "Active subscriptions", body = Vec<Subscription>)
    )
)]
pub async fn list_subscriptions(
    State(state): State<AppState>,
    Query(query): Query<SubscriptionQuery>,
) -> Json<Vec<Subscription>> {
    let reader_email = query.reader_email.as_deref().filter(|email| !email.is_empty());
    Json(state.services.bioalert.list_subscriptions(reader_email))
}
