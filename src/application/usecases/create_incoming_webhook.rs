// Use case: create_incoming_webhook.

use crate::application::context::AppContext;
use crate::domain::entities::incoming_webhook::{IncomingWebhookDefinition, IncomingWebhookDraft};
use crate::domain::services::notifier::Notification;
use crate::domain::value_objects::timestamps::Timestamp;
use crate::infrastructure::db::dto::IncomingWebhookRow;
use crate::infrastructure::db::stores::incoming_webhook_store::IncomingWebhookRepositoryError;

/// Creates an incoming endpoint definition; path and secret are generated.
pub struct CreateIncomingWebhookUseCase;

#[derive(Debug)]
pub enum CreateIncomingWebhookError {
    Validation(String),
    Conflict,
    Storage(String),
}

#[derive(Debug, Clone)]
pub struct CreateIncomingWebhookCommand {
    pub draft: IncomingWebhookDraft,
}

impl CreateIncomingWebhookUseCase {
    pub async fn execute(
        ctx: &AppContext,
        cmd: CreateIncomingWebhookCommand,
    ) -> Result<IncomingWebhookDefinition, CreateIncomingWebhookError> {
        // Step 1: A nameless endpoint is rejected before storage.
        if cmd.draft.name.trim().is_empty() {
            return Err(CreateIncomingWebhookError::Validation(
                "name is required".to_string(),
            ));
        }

        // Step 2: Build and persist the definition.
        let definition = IncomingWebhookDefinition::create(cmd.draft, Timestamp::now_utc());
        let stored = ctx
            .repos
            .incoming_webhook
            .insert(&IncomingWebhookRow::from_definition(&definition))
            .await
            .map_err(|e| match e {
                IncomingWebhookRepositoryError::Conflict => CreateIncomingWebhookError::Conflict,
                _ => CreateIncomingWebhookError::Storage(format!("{e:?}")),
            })?;

        // Step 3: Announce and return the stored definition.
        let stored = stored.into_definition();
        ctx.notifier.notify(Notification::IncomingWebhookCreated {
            name: stored.name.clone(),
        });
        Ok(stored)
    }
}
