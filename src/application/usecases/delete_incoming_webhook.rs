// Use case: delete_incoming_webhook.

use crate::application::context::AppContext;
use crate::domain::services::notifier::Notification;
use crate::domain::value_objects::ids::IncomingWebhookId;
use crate::infrastructure::db::stores::incoming_webhook_store::IncomingWebhookRepositoryError;

pub struct DeleteIncomingWebhookUseCase;

#[derive(Debug)]
pub enum DeleteIncomingWebhookError {
    NotFound,
    Storage(String),
}

#[derive(Debug, Clone)]
pub struct DeleteIncomingWebhookCommand {
    pub incoming_webhook_id: IncomingWebhookId,
}

impl DeleteIncomingWebhookUseCase {
    pub async fn execute(
        ctx: &AppContext,
        cmd: DeleteIncomingWebhookCommand,
    ) -> Result<(), DeleteIncomingWebhookError> {
        // Step 1: Load the definition for the notification snapshot.
        let row = ctx
            .repos
            .incoming_webhook
            .get(cmd.incoming_webhook_id.0)
            .await
            .map_err(|e| DeleteIncomingWebhookError::Storage(format!("{e:?}")))?;
        let Some(row) = row else {
            return Err(DeleteIncomingWebhookError::NotFound);
        };

        // Step 2: Delete and clear any stale selection.
        ctx.repos
            .incoming_webhook
            .delete(cmd.incoming_webhook_id.0)
            .await
            .map_err(|e| match e {
                IncomingWebhookRepositoryError::NotFound => DeleteIncomingWebhookError::NotFound,
                _ => DeleteIncomingWebhookError::Storage(format!("{e:?}")),
            })?;
        ctx.session
            .clear_incoming_webhook_selection_if(cmd.incoming_webhook_id);
        ctx.notifier
            .notify(Notification::IncomingWebhookDeleted { name: row.name });

        Ok(())
    }
}
