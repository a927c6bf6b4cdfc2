pub mod database;
pub mod execution_log_store_postgres;
pub mod incoming_webhook_store_postgres;
pub mod webhook_store_postgres;

pub use database::PostgresDatabase;
