//! BioAlert availability notifications
//!
//! [`BioAlert`] is the registry of reader subscriptions. One instance is
//! created at start-up and shared (`Arc`) between the loans service, which
//! fires notifications on return, and [`BioAlertService`], which handles
//! subscribe and list requests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use super::{clock::Clock, SharedRepository};
use crate::{
    error::AppResult,
    models::{Notification, Subscription},
};

/// Subscription registry
#[derive(Debug, Default)]
pub struct BioAlert {
    subscriptions: Mutex<Vec<Subscription>>,
}

impl BioAlert {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest of a reader in a book. Duplicates are kept and each
    /// one yields its own notification.
    pub fn subscribe(&self, reader_email: &str, book_id: &str, at: DateTime<Utc>) -> Subscription {
        let subscription = Subscription {
            reader_email: reader_email.to_string(),
            book_id: book_id.to_string(),
            subscribed_at: at,
        };
        self.subscriptions.lock().push(subscription.clone());
        subscription
    }

    /// Build one notification per subscription to `book_id`, in subscription
    /// order, and drop those subscriptions.
    pub fn notify_availability(&self, book_id: &str, at: DateTime<Utc>) -> Vec<Notification> {
        let mut notifications = Vec::new();
        self.subscriptions.lock().retain(|subscription| {
            if subscription.book_id != book_id {
                return true;
            }
            notifications.push(Notification {
                email: subscription.reader_email.clone(),
                message: format!("Book {} is available", book_id),
                sent_at: at,
            });
            false
        });

        if !notifications.is_empty() {
            tracing::info!(
                book_id,
                count = notifications.len(),
                "Availability notifications sent"
            );
        }
        notifications
    }

    /// Current subscriptions, optionally only those of one reader
    pub fn subscriptions(&self, reader_email: Option<&str>) -> Vec<Subscription> {
        let subscriptions = self.subscriptions.lock();
        match reader_email {
            Some(email) => subscriptions
                .iter()
                .filter(|s| s.reader_email == email)
                .cloned()
                .collect(),
            None => subscriptions.clone(),
        }
    }
}

#[derive(Clone)]
pub struct BioAlertService {
    repository: SharedRepository,
    registry: Arc<BioAlert>,
    clock: Arc<dyn Clock>,
}

impl BioAlertService {
    pub fn new(repository: SharedRepository, registry: Arc<BioAlert>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            registry,
            clock,
        }
    }

    /// Subscribe an existing reader to an existing book
    pub fn subscribe(&self, reader_email: &str, book_id: &str) -> AppResult<Subscription> {
        {
            let repo = self.repository.read();
            repo.readers_get(reader_email)?;
            repo.books_get(book_id)?;
        }
        Ok(self.registry.subscribe(reader_email, book_id, self.clock.now()))
    }

    pub fn list_subscriptions(&self, reader_email: Option<&str>) -> Vec<Subscription> {
        self.registry.subscriptions(reader_email)
    }
}
