use crate::infrastructure::db::database::DatabaseError;
use crate::infrastructure::db::dto::ExecutionLogRow;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionLogRepositoryError {
    NotFound,
    Conflict,
    InvalidInput,
    StorageUnavailable,
}

impl From<DatabaseError> for ExecutionLogRepositoryError {
    fn from(_: DatabaseError) -> Self {
        ExecutionLogRepositoryError::StorageUnavailable
    }
}

/// Filters for log queries; both compose with AND.
#[derive(Debug, Clone, Default)]
pub struct ExecutionLogFilter {
    pub webhook_id: Option<uuid::Uuid>,
    /// Case-insensitive substring match over webhook name, request URL,
    /// stringified response status, and error text.
    pub search: Option<String>,
}

#[async_trait]
pub trait ExecutionLogStore: Send + Sync {
    /// Append a log entry and return exactly what was stored. Entries
    /// beyond `max_entries_per_webhook` are evicted oldest-first for the
    /// entry's webhook.
    async fn insert(
        &self,
        row: &ExecutionLogRow,
        max_entries_per_webhook: usize,
    ) -> Result<ExecutionLogRow, ExecutionLogRepositoryError>;
    /// Query entries newest-first under the given filter.
    async fn query(
        &self,
        filter: &ExecutionLogFilter,
    ) -> Result<Vec<ExecutionLogRow>, ExecutionLogRepositoryError>;
    /// Delete every entry belonging to a webhook; returns how many went.
    async fn delete_by_webhook(
        &self,
        webhook_id: uuid::Uuid,
    ) -> Result<u64, ExecutionLogRepositoryError>;
}
