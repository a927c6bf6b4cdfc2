pub mod execution_log;
pub mod incoming_webhook;
pub mod webhook;
