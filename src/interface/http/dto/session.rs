use crate::application::session::SessionSnapshot;
use crate::application::test_slot::SandboxMode;
use crate::domain::entities::execution_log::ExecutionLogEntry;
use crate::interface::http::dto::execution_log::ExecutionLogEntryResponse;
use crate::interface::http::dto::incoming_webhook::IncomingWebhookResponse;
use crate::interface::http::dto::webhook::WebhookResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub selected_webhook: Option<WebhookResponse>,
    pub selected_incoming_webhook: Option<IncomingWebhookResponse>,
    pub webhook_modal_open: bool,
    pub incoming_webhook_modal_open: bool,
    pub sandbox_mode: String,
    pub last_test_result: Option<ExecutionLogEntryResponse>,
}

impl SessionResponse {
    pub fn build(
        snapshot: SessionSnapshot,
        mode: SandboxMode,
        last_test_result: Option<ExecutionLogEntry>,
    ) -> Self {
        Self {
            selected_webhook: snapshot.selected_webhook.map(WebhookResponse::from_definition),
            selected_incoming_webhook: snapshot
                .selected_incoming_webhook
                .map(IncomingWebhookResponse::from_definition),
            webhook_modal_open: snapshot.webhook_modal_open,
            incoming_webhook_modal_open: snapshot.incoming_webhook_modal_open,
            sandbox_mode: match mode {
                SandboxMode::Normal => "normal".to_string(),
                SandboxMode::Testing => "testing".to_string(),
            },
            last_test_result: last_test_result.map(ExecutionLogEntryResponse::from_entry),
        }
    }
}
