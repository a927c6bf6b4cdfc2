pub mod execution_log;
pub mod incoming_webhook;
pub mod webhook;

pub use execution_log::ExecutionLogRow;
pub use incoming_webhook::IncomingWebhookRow;
pub use webhook::WebhookRow;
