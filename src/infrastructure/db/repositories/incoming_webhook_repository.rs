use crate::infrastructure::db::dto::IncomingWebhookRow;
use crate::infrastructure::db::stores::incoming_webhook_store::{
    IncomingWebhookRepositoryError, IncomingWebhookStore,
};
use std::sync::Arc;

pub struct IncomingWebhookRepository {
    store: Arc<dyn IncomingWebhookStore>,
}

impl IncomingWebhookRepository {
    /// Build a repository that uses the given store implementation.
    pub fn new(store: Arc<dyn IncomingWebhookStore>) -> Self {
        Self { store }
    }

    /// Fetch an incoming endpoint by its ID. Returns `None` if it doesn't exist.
    pub async fn get(
        &self,
        incoming_webhook_id: uuid::Uuid,
    ) -> Result<Option<IncomingWebhookRow>, IncomingWebhookRepositoryError> {
        self.store.get(incoming_webhook_id).await
    }

    /// List all incoming endpoints, newest first.
    pub async fn list(&self) -> Result<Vec<IncomingWebhookRow>, IncomingWebhookRepositoryError> {
        self.store.list().await
    }

    /// Create an endpoint and return what was actually stored.
    pub async fn insert(
        &self,
        row: &IncomingWebhookRow,
    ) -> Result<IncomingWebhookRow, IncomingWebhookRepositoryError> {
        self.store.insert(row).await
    }

    /// Replace an endpoint and return what was actually stored.
    pub async fn update(
        &self,
        row: &IncomingWebhookRow,
    ) -> Result<IncomingWebhookRow, IncomingWebhookRepositoryError> {
        self.store.update(row).await
    }

    /// Delete an endpoint by its ID. Returns an error if it doesn't exist.
    pub async fn delete(
        &self,
        incoming_webhook_id: uuid::Uuid,
    ) -> Result<(), IncomingWebhookRepositoryError> {
        self.store.delete(incoming_webhook_id).await
    }
}
