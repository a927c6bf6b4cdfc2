// Use case: query_execution_logs.

use crate::application::context::AppContext;
use crate::domain::entities::execution_log::ExecutionLogEntry;
use crate::domain::value_objects::ids::WebhookId;
use crate::infrastructure::db::stores::execution_log_store::ExecutionLogFilter;

/// Searches the execution log, newest first.
pub struct QueryExecutionLogsUseCase;

#[derive(Debug)]
pub enum QueryExecutionLogsError {
    Storage(String),
}

#[derive(Debug, Clone, Default)]
pub struct QueryExecutionLogsCommand {
    pub webhook_id: Option<WebhookId>,
    pub search: Option<String>,
}

impl QueryExecutionLogsUseCase {
    pub async fn execute(
        ctx: &AppContext,
        cmd: QueryExecutionLogsCommand,
    ) -> Result<Vec<ExecutionLogEntry>, QueryExecutionLogsError> {
        let filter = ExecutionLogFilter {
            webhook_id: cmd.webhook_id.map(|id| id.0),
            search: cmd.search.filter(|s| !s.trim().is_empty()),
        };
        let rows = ctx
            .repos
            .execution_log
            .query(&filter)
            .await
            .map_err(|e| QueryExecutionLogsError::Storage(format!("{e:?}")))?;
        Ok(rows.into_iter().map(|row| row.into_entry()).collect())
    }
}
