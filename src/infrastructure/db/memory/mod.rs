pub mod execution_log_store_memory;
pub mod incoming_webhook_store_memory;
pub mod webhook_store_memory;
