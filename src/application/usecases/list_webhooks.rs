// Use case: list_webhooks.

use crate::application::context::AppContext;
use crate::domain::entities::webhook::WebhookDefinition;

pub struct ListWebhooksUseCase;

#[derive(Debug)]
pub enum ListWebhooksError {
    Storage(String),
}

impl ListWebhooksUseCase {
    /// List every webhook, newest first.
    pub async fn execute(ctx: &AppContext) -> Result<Vec<WebhookDefinition>, ListWebhooksError> {
        let rows = ctx
            .repos
            .webhook
            .list()
            .await
            .map_err(|e| ListWebhooksError::Storage(format!("{e:?}")))?;
        Ok(rows.into_iter().map(|row| row.into_definition()).collect())
    }
}
