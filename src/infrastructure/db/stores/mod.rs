pub mod execution_log_store;
pub mod incoming_webhook_store;
pub mod webhook_store;
