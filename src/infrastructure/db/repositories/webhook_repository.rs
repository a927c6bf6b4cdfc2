use crate::infrastructure::db::dto::WebhookRow;
use crate::infrastructure::db::stores::webhook_store::{WebhookRepositoryError, WebhookStore};
use std::sync::Arc;
use time::OffsetDateTime;

pub struct WebhookRepository {
    store: Arc<dyn WebhookStore>,
}

impl WebhookRepository {
    /// Build a repository that uses the given store implementation.
    pub fn new(store: Arc<dyn WebhookStore>) -> Self {
        Self { store }
    }

    /// Fetch a webhook by its ID. Returns `None` if it doesn't exist.
    pub async fn get(
        &self,
        webhook_id: uuid::Uuid,
    ) -> Result<Option<WebhookRow>, WebhookRepositoryError> {
        self.store.get(webhook_id).await
    }

    /// List all webhooks, newest first.
    pub async fn list(&self) -> Result<Vec<WebhookRow>, WebhookRepositoryError> {
        self.store.list().await
    }

    /// Create a webhook and return what was actually stored.
    pub async fn insert(&self, row: &WebhookRow) -> Result<WebhookRow, WebhookRepositoryError> {
        self.store.insert(row).await
    }

    /// Replace a webhook and return what was actually stored.
    pub async fn update(&self, row: &WebhookRow) -> Result<WebhookRow, WebhookRepositoryError> {
        self.store.update(row).await
    }

    /// Delete a webhook by its ID. Returns an error if it doesn't exist.
    pub async fn delete(&self, webhook_id: uuid::Uuid) -> Result<(), WebhookRepositoryError> {
        self.store.delete(webhook_id).await
    }

    /// Record a dispatch outcome on the execution-status cache; stale
    /// outcomes are ignored. Returns the row as stored afterwards.
    pub async fn record_execution(
        &self,
        webhook_id: uuid::Uuid,
        executed_at: OffsetDateTime,
        status: &str,
    ) -> Result<WebhookRow, WebhookRepositoryError> {
        self.store
            .record_execution(webhook_id, executed_at, status)
            .await
    }
}
