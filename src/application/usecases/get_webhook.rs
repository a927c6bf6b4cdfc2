// Use case: get_webhook.

use crate::application::context::AppContext;
use crate::domain::entities::webhook::WebhookDefinition;
use crate::domain::value_objects::ids::WebhookId;

pub struct GetWebhookUseCase;

#[derive(Debug)]
pub enum GetWebhookError {
    NotFound,
    Storage(String),
}

impl GetWebhookUseCase {
    pub async fn execute(
        ctx: &AppContext,
        webhook_id: WebhookId,
    ) -> Result<WebhookDefinition, GetWebhookError> {
        let row = ctx
            .repos
            .webhook
            .get(webhook_id.0)
            .await
            .map_err(|e| GetWebhookError::Storage(format!("{e:?}")))?;
        match row {
            Some(row) => Ok(row.into_definition()),
            None => Err(GetWebhookError::NotFound),
        }
    }
}
