// Use case: update_incoming_webhook.

use crate::application::context::AppContext;
use crate::domain::entities::incoming_webhook::{IncomingWebhookDefinition, IncomingWebhookDraft};
use crate::domain::services::notifier::Notification;
use crate::domain::value_objects::ids::IncomingWebhookId;
use crate::domain::value_objects::timestamps::Timestamp;
use crate::infrastructure::db::dto::IncomingWebhookRow;
use crate::infrastructure::db::stores::incoming_webhook_store::IncomingWebhookRepositoryError;

/// Replaces an incoming endpoint's editable fields; path and secret stay.
pub struct UpdateIncomingWebhookUseCase;

#[derive(Debug)]
pub enum UpdateIncomingWebhookError {
    NotFound,
    Validation(String),
    Storage(String),
}

#[derive(Debug, Clone)]
pub struct UpdateIncomingWebhookCommand {
    pub incoming_webhook_id: IncomingWebhookId,
    pub draft: IncomingWebhookDraft,
}

impl UpdateIncomingWebhookUseCase {
    pub async fn execute(
        ctx: &AppContext,
        cmd: UpdateIncomingWebhookCommand,
    ) -> Result<IncomingWebhookDefinition, UpdateIncomingWebhookError> {
        // Step 1: A nameless endpoint is rejected before storage.
        if cmd.draft.name.trim().is_empty() {
            return Err(UpdateIncomingWebhookError::Validation(
                "name is required".to_string(),
            ));
        }

        // Step 2: Load the current definition.
        let row = ctx
            .repos
            .incoming_webhook
            .get(cmd.incoming_webhook_id.0)
            .await
            .map_err(|e| UpdateIncomingWebhookError::Storage(format!("{e:?}")))?;
        let Some(row) = row else {
            return Err(UpdateIncomingWebhookError::NotFound);
        };

        // Step 3: Apply the draft and persist the replacement.
        let mut definition = row.into_definition();
        definition.apply_draft(cmd.draft, Timestamp::now_utc());
        let stored = ctx
            .repos
            .incoming_webhook
            .update(&IncomingWebhookRow::from_definition(&definition))
            .await
            .map_err(|e| match e {
                IncomingWebhookRepositoryError::NotFound => UpdateIncomingWebhookError::NotFound,
                _ => UpdateIncomingWebhookError::Storage(format!("{e:?}")),
            })?;

        // Step 4: Announce and return the stored definition.
        let stored = stored.into_definition();
        ctx.notifier.notify(Notification::IncomingWebhookUpdated {
            name: stored.name.clone(),
        });
        Ok(stored)
    }
}
