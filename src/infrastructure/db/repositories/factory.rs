use std::sync::Arc;

use crate::infrastructure::db::memory::execution_log_store_memory::ExecutionLogStoreMemory;
use crate::infrastructure::db::memory::incoming_webhook_store_memory::IncomingWebhookStoreMemory;
use crate::infrastructure::db::memory::webhook_store_memory::WebhookStoreMemory;
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::postgres::execution_log_store_postgres::ExecutionLogStorePostgres;
use crate::infrastructure::db::postgres::incoming_webhook_store_postgres::IncomingWebhookStorePostgres;
use crate::infrastructure::db::postgres::webhook_store_postgres::WebhookStorePostgres;
use crate::infrastructure::db::repositories::execution_log_repository::ExecutionLogRepository;
use crate::infrastructure::db::repositories::incoming_webhook_repository::IncomingWebhookRepository;
use crate::infrastructure::db::repositories::webhook_repository::WebhookRepository;

#[derive(Clone)]
pub struct Repositories {
    pub webhook: Arc<WebhookRepository>,
    pub incoming_webhook: Arc<IncomingWebhookRepository>,
    pub execution_log: Arc<ExecutionLogRepository>,
}

impl Repositories {
    /// Build all repositories backed by Postgres stores.
    pub fn postgres(db: Arc<PostgresDatabase>) -> Self {
        let webhook_store = Arc::new(WebhookStorePostgres::new(db.clone()));
        let incoming_store = Arc::new(IncomingWebhookStorePostgres::new(db.clone()));
        let log_store = Arc::new(ExecutionLogStorePostgres::new(db));

        Self {
            webhook: Arc::new(WebhookRepository::new(webhook_store)),
            incoming_webhook: Arc::new(IncomingWebhookRepository::new(incoming_store)),
            execution_log: Arc::new(ExecutionLogRepository::new(log_store)),
        }
    }

    /// Build all repositories backed by process-local stores.
    pub fn in_memory() -> Self {
        Self {
            webhook: Arc::new(WebhookRepository::new(Arc::new(WebhookStoreMemory::new()))),
            incoming_webhook: Arc::new(IncomingWebhookRepository::new(Arc::new(
                IncomingWebhookStoreMemory::new(),
            ))),
            execution_log: Arc::new(ExecutionLogRepository::new(Arc::new(
                ExecutionLogStoreMemory::new(),
            ))),
        }
    }
}
