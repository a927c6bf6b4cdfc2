use crate::infrastructure::db::database::DatabaseError;
use crate::infrastructure::db::dto::WebhookRow;
use async_trait::async_trait;
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookRepositoryError {
    NotFound,
    Conflict,
    InvalidInput,
    StorageUnavailable,
}

impl From<DatabaseError> for WebhookRepositoryError {
    fn from(_: DatabaseError) -> Self {
        WebhookRepositoryError::StorageUnavailable
    }
}

#[async_trait]
pub trait WebhookStore: Send + Sync {
    /// Fetch a webhook by its ID. Returns `None` if it doesn't exist.
    async fn get(
        &self,
        webhook_id: uuid::Uuid,
    ) -> Result<Option<WebhookRow>, WebhookRepositoryError>;
    /// List all webhooks, newest first.
    async fn list(&self) -> Result<Vec<WebhookRow>, WebhookRepositoryError>;
    /// Create a webhook and return exactly what was stored.
    async fn insert(&self, row: &WebhookRow) -> Result<WebhookRow, WebhookRepositoryError>;
    /// Replace a webhook and return exactly what was stored.
    async fn update(&self, row: &WebhookRow) -> Result<WebhookRow, WebhookRepositoryError>;
    /// Delete a webhook by its ID. Returns an error if it doesn't exist.
    async fn delete(&self, webhook_id: uuid::Uuid) -> Result<(), WebhookRepositoryError>;
    /// Record a dispatch outcome on the execution-status cache. The write
    /// applies only when `executed_at` is not older than the stored value,
    /// so a stale completion cannot clobber a newer one. Returns the row
    /// as stored afterwards.
    async fn record_execution(
        &self,
        webhook_id: uuid::Uuid,
        executed_at: OffsetDateTime,
        status: &str,
    ) -> Result<WebhookRow, WebhookRepositoryError>;
}
