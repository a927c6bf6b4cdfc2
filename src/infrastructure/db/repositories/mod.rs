pub mod execution_log_repository;
pub mod factory;
pub mod incoming_webhook_repository;
pub mod webhook_repository;

pub use factory::Repositories;
