pub mod create_incoming_webhook;
pub mod create_webhook;
pub mod delete_incoming_webhook;
pub mod delete_webhook;
pub mod dispatch_webhook;
pub mod get_webhook;
pub mod list_incoming_webhooks;
pub mod list_webhooks;
pub mod query_execution_logs;
pub mod update_incoming_webhook;
pub mod update_webhook;
