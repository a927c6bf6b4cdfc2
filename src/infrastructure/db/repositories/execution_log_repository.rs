use crate::infrastructure::db::dto::ExecutionLogRow;
use crate::infrastructure::db::stores::execution_log_store::{
    ExecutionLogFilter, ExecutionLogRepositoryError, ExecutionLogStore,
};
use std::sync::Arc;

pub struct ExecutionLogRepository {
    store: Arc<dyn ExecutionLogStore>,
}

impl ExecutionLogRepository {
    /// Build a repository that uses the given store implementation.
    pub fn new(store: Arc<dyn ExecutionLogStore>) -> Self {
        Self { store }
    }

    /// Append a log entry, evicting entries beyond the retention cap.
    pub async fn insert(
        &self,
        row: &ExecutionLogRow,
        max_entries_per_webhook: usize,
    ) -> Result<ExecutionLogRow, ExecutionLogRepositoryError> {
        self.store.insert(row, max_entries_per_webhook).await
    }

    /// Query entries newest-first under the given filter.
    pub async fn query(
        &self,
        filter: &ExecutionLogFilter,
    ) -> Result<Vec<ExecutionLogRow>, ExecutionLogRepositoryError> {
        self.store.query(filter).await
    }

    /// Delete every entry belonging to a webhook; returns how many went.
    pub async fn delete_by_webhook(
        &self,
        webhook_id: uuid::Uuid,
    ) -> Result<u64, ExecutionLogRepositoryError> {
        self.store.delete_by_webhook(webhook_id).await
    }
}
