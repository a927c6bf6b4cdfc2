use crate::infrastructure::db::database::DatabaseError;
use crate::infrastructure::db::dto::IncomingWebhookRow;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomingWebhookRepositoryError {
    NotFound,
    Conflict,
    InvalidInput,
    StorageUnavailable,
}

impl From<DatabaseError> for IncomingWebhookRepositoryError {
    fn from(_: DatabaseError) -> Self {
        IncomingWebhookRepositoryError::StorageUnavailable
    }
}

#[async_trait]
pub trait IncomingWebhookStore: Send + Sync {
    /// Fetch an incoming endpoint by its ID. Returns `None` if it doesn't exist.
    async fn get(
        &self,
        incoming_webhook_id: uuid::Uuid,
    ) -> Result<Option<IncomingWebhookRow>, IncomingWebhookRepositoryError>;
    /// List all incoming endpoints, newest first.
    async fn list(&self) -> Result<Vec<IncomingWebhookRow>, IncomingWebhookRepositoryError>;
    /// Create an endpoint and return exactly what was stored.
    async fn insert(
        &self,
        row: &IncomingWebhookRow,
    ) -> Result<IncomingWebhookRow, IncomingWebhookRepositoryError>;
    /// Replace an endpoint and return exactly what was stored.
    async fn update(
        &self,
        row: &IncomingWebhookRow,
    ) -> Result<IncomingWebhookRow, IncomingWebhookRepositoryError>;
    /// Delete an endpoint by its ID. Returns an error if it doesn't exist.
    async fn delete(
        &self,
        incoming_webhook_id: uuid::Uuid,
    ) -> Result<(), IncomingWebhookRepositoryError>;
}
