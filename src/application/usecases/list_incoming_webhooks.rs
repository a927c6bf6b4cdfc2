// Use case: list_incoming_webhooks.

use crate::application::context::AppContext;
use crate::domain::entities::incoming_webhook::IncomingWebhookDefinition;

pub struct ListIncomingWebhooksUseCase;

#[derive(Debug)]
pub enum ListIncomingWebhooksError {
    Storage(String),
}

impl ListIncomingWebhooksUseCase {
    /// List every incoming endpoint, newest first.
    pub async fn execute(
        ctx: &AppContext,
    ) -> Result<Vec<IncomingWebhookDefinition>, ListIncomingWebhooksError> {
        let rows = ctx
            .repos
            .incoming_webhook
            .list()
            .await
            .map_err(|e| ListIncomingWebhooksError::Storage(format!("{e:?}")))?;
        Ok(rows.into_iter().map(|row| row.into_definition()).collect())
    }
}
