// Use case: update_webhook.

use crate::application::context::AppContext;
use crate::domain::entities::webhook::{WebhookDefinition, WebhookDraft};
use crate::domain::services::notifier::Notification;
use crate::domain::value_objects::ids::WebhookId;
use crate::domain::value_objects::timestamps::Timestamp;
use crate::infrastructure::db::dto::WebhookRow;
use crate::infrastructure::db::stores::webhook_store::WebhookRepositoryError;

/// Replaces a webhook's editable fields with a new draft (full-object
/// replace, not a partial patch).
pub struct UpdateWebhookUseCase;

#[derive(Debug)]
pub enum UpdateWebhookError {
    NotFound,
    Validation(String),
    Storage(String),
}

#[derive(Debug, Clone)]
pub struct UpdateWebhookCommand {
    pub webhook_id: WebhookId,
    pub draft: WebhookDraft,
}

impl UpdateWebhookUseCase {
    /// Apply the draft and return what the store acknowledged.
    pub async fn execute(
        ctx: &AppContext,
        cmd: UpdateWebhookCommand,
    ) -> Result<WebhookDefinition, UpdateWebhookError> {
        // Step 1: Reject drafts that could never dispatch.
        if cmd.draft.name.trim().is_empty() {
            return Err(UpdateWebhookError::Validation("name is required".to_string()));
        }
        if cmd.draft.url.trim().is_empty() {
            return Err(UpdateWebhookError::Validation("url is required".to_string()));
        }

        // Step 2: Load the current definition.
        let row = ctx
            .repos
            .webhook
            .get(cmd.webhook_id.0)
            .await
            .map_err(|e| UpdateWebhookError::Storage(format!("{e:?}")))?;
        let Some(row) = row else {
            return Err(UpdateWebhookError::NotFound);
        };

        // Step 3: Apply the draft and persist the replacement.
        let mut definition = row.into_definition();
        definition.apply_draft(cmd.draft, Timestamp::now_utc());
        let stored = ctx
            .repos
            .webhook
            .update(&WebhookRow::from_definition(&definition))
            .await
            .map_err(|e| match e {
                WebhookRepositoryError::NotFound => UpdateWebhookError::NotFound,
                _ => UpdateWebhookError::Storage(format!("{e:?}")),
            })?;

        // Step 4: Keep the session selection in sync and announce.
        let stored = stored.into_definition();
        ctx.session.refresh_selected_webhook(&stored);
        ctx.notifier.notify(Notification::WebhookUpdated {
            name: stored.name.clone(),
        });
        Ok(stored)
    }
}
