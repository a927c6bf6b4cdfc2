// Use case: delete_webhook.

use crate::application::context::AppContext;
use crate::domain::services::notifier::Notification;
use crate::domain::value_objects::ids::WebhookId;
use crate::infrastructure::db::stores::webhook_store::WebhookRepositoryError;
use tracing::warn;

/// Deletes a webhook and cascades deletion of its execution log entries.
pub struct DeleteWebhookUseCase;

#[derive(Debug)]
pub enum DeleteWebhookError {
    NotFound,
    Storage(String),
}

#[derive(Debug, Clone)]
pub struct DeleteWebhookCommand {
    pub webhook_id: WebhookId,
}

#[derive(Debug, Clone)]
pub struct DeleteWebhookResult {
    pub removed_log_entries: u64,
}

impl DeleteWebhookUseCase {
    pub async fn execute(
        ctx: &AppContext,
        cmd: DeleteWebhookCommand,
    ) -> Result<DeleteWebhookResult, DeleteWebhookError> {
        // Step 1: Load the definition for the notification snapshot.
        let row = ctx
            .repos
            .webhook
            .get(cmd.webhook_id.0)
            .await
            .map_err(|e| DeleteWebhookError::Storage(format!("{e:?}")))?;
        let Some(row) = row else {
            return Err(DeleteWebhookError::NotFound);
        };

        // Step 2: Delete the definition itself.
        ctx.repos
            .webhook
            .delete(cmd.webhook_id.0)
            .await
            .map_err(|e| match e {
                WebhookRepositoryError::NotFound => DeleteWebhookError::NotFound,
                _ => DeleteWebhookError::Storage(format!("{e:?}")),
            })?;

        // Step 3: Cascade the log entries. A failed cascade leaves orphans
        // behind but must not resurrect the webhook.
        let removed_log_entries = match ctx
            .repos
            .execution_log
            .delete_by_webhook(cmd.webhook_id.0)
            .await
        {
            Ok(count) => count,
            Err(e) => {
                warn!(webhook_id = %cmd.webhook_id, error = ?e, "log_cascade_failed");
                0
            }
        };

        // Step 4: Drop the selection if it pointed at the deleted webhook.
        ctx.session.clear_webhook_selection_if(cmd.webhook_id);
        ctx.notifier.notify(Notification::WebhookDeleted { name: row.name });

        Ok(DeleteWebhookResult {
            removed_log_entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DeleteWebhookCommand, DeleteWebhookError, DeleteWebhookUseCase};
    use crate::application::context::test_support::test_context;
    use crate::application::usecases::create_webhook::{CreateWebhookCommand, CreateWebhookUseCase};
    use crate::domain::entities::execution_log::ExecutionLogEntry;
    use crate::domain::entities::webhook::{HttpMethod, Schedule, WebhookDraft};
    use crate::domain::value_objects::ids::{LogEntryId, WebhookId};
    use crate::domain::value_objects::timestamps::Timestamp;
    use crate::infrastructure::db::dto::ExecutionLogRow;
    use std::collections::BTreeMap;

    fn draft() -> WebhookDraft {
        WebhookDraft {
            name: "doomed hook".to_string(),
            description: String::new(),
            url: "https://api.example.com".to_string(),
            method: HttpMethod::Get,
            headers: vec![],
            params: vec![],
            body: None,
            enabled: true,
            tags: vec![],
            schedule: Schedule::Manual,
        }
    }

    fn log_entry(webhook_id: WebhookId) -> ExecutionLogRow {
        ExecutionLogRow::from_entry(&ExecutionLogEntry {
            id: LogEntryId::new(),
            webhook_id,
            webhook_name: "doomed hook".to_string(),
            timestamp: Timestamp::now_utc(),
            request_url: "https://api.example.com".to_string(),
            request_method: HttpMethod::Get,
            request_headers: BTreeMap::new(),
            request_body: None,
            response_status: 200,
            response_headers: BTreeMap::new(),
            response_body: None,
            duration_ms: 5,
            success: true,
            error: None,
        })
    }

    #[tokio::test]
    async fn given_webhook_with_logs_when_execute_should_cascade_them() {
        let ctx = test_context();
        let created = CreateWebhookUseCase::execute(&ctx, CreateWebhookCommand { draft: draft() })
            .await
            .unwrap();
        ctx.repos
            .execution_log
            .insert(&log_entry(created.id), 100)
            .await
            .unwrap();
        ctx.repos
            .execution_log
            .insert(&log_entry(created.id), 100)
            .await
            .unwrap();

        let result = DeleteWebhookUseCase::execute(
            &ctx,
            DeleteWebhookCommand {
                webhook_id: created.id,
            },
        )
        .await
        .unwrap();

        assert_eq!(result.removed_log_entries, 2);
        assert!(ctx.repos.webhook.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn given_selected_webhook_when_execute_should_clear_selection() {
        let ctx = test_context();
        let created = CreateWebhookUseCase::execute(&ctx, CreateWebhookCommand { draft: draft() })
            .await
            .unwrap();
        ctx.session.open_webhook_editor(created.clone());

        DeleteWebhookUseCase::execute(
            &ctx,
            DeleteWebhookCommand {
                webhook_id: created.id,
            },
        )
        .await
        .unwrap();

        assert!(ctx.session.snapshot().selected_webhook.is_none());
    }

    #[tokio::test]
    async fn given_unknown_id_when_execute_should_return_not_found() {
        let ctx = test_context();

        let result = DeleteWebhookUseCase::execute(
            &ctx,
            DeleteWebhookCommand {
                webhook_id: WebhookId::new(),
            },
        )
        .await;

        assert!(matches!(result, Err(DeleteWebhookError::NotFound)));
    }
}
