//! BioAlert subscription and notification types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A reader's interest in a book becoming available
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Subscription {
    pub reader_email: String,
    pub book_id: String,
    pub subscribed_at: DateTime<Utc>,
}

/// Availability notice produced for one subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    pub email: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// Subscribe request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSubscription {
    pub reader_email: String,
    pub book_id: String,
}

/// Subscription listing filter
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SubscriptionQuery {
    /// Only subscriptions of this reader; empty means all
    pub reader_email: Option<String>,
}
