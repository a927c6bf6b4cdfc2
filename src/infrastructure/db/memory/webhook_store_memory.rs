use crate::infrastructure::db::dto::WebhookRow;
use crate::infrastructure::db::stores::webhook_store::{WebhookRepositoryError, WebhookStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use time::OffsetDateTime;

/// Process-local webhook store. Backs tests and storage-less deployments.
#[derive(Default)]
pub struct WebhookStoreMemory {
    rows: Mutex<HashMap<uuid::Uuid, WebhookRow>>,
}

impl WebhookStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WebhookStore for WebhookStoreMemory {
    async fn get(
        &self,
        webhook_id: uuid::Uuid,
    ) -> Result<Option<WebhookRow>, WebhookRepositoryError> {
        Ok(self.rows.lock().unwrap().get(&webhook_id).cloned())
    }

    async fn list(&self) -> Result<Vec<WebhookRow>, WebhookRepositoryError> {
        let mut rows: Vec<WebhookRow> = self.rows.lock().unwrap().values().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert(&self, row: &WebhookRow) -> Result<WebhookRow, WebhookRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&row.id) {
            return Err(WebhookRepositoryError::Conflict);
        }
        rows.insert(row.id, row.clone());
        Ok(row.clone())
    }

    async fn update(&self, row: &WebhookRow) -> Result<WebhookRow, WebhookRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&row.id) {
            return Err(WebhookRepositoryError::NotFound);
        }
        rows.insert(row.id, row.clone());
        Ok(row.clone())
    }

    async fn delete(&self, webhook_id: uuid::Uuid) -> Result<(), WebhookRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.remove(&webhook_id).is_none() {
            return Err(WebhookRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn record_execution(
        &self,
        webhook_id: uuid::Uuid,
        executed_at: OffsetDateTime,
        status: &str,
    ) -> Result<WebhookRow, WebhookRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.get_mut(&webhook_id) else {
            return Err(WebhookRepositoryError::NotFound);
        };
        let stale = row
            .last_executed_at
            .map(|previous| executed_at < previous)
            .unwrap_or(false);
        if !stale {
            row.last_executed_at = Some(executed_at);
            row.last_execution_status = Some(status.to_string());
            row.updated_at = executed_at;
        }
        Ok(row.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::webhook::{HttpMethod, Schedule, WebhookDefinition, WebhookDraft};
    use crate::domain::value_objects::timestamps::Timestamp;

    fn row(name: &str) -> WebhookRow {
        WebhookRow::from_definition(&WebhookDefinition::create(
            WebhookDraft {
                name: name.to_string(),
                description: String::new(),
                url: "https://api.example.com".to_string(),
                method: HttpMethod::Get,
                headers: vec![],
                params: vec![],
                body: None,
                enabled: true,
                tags: vec![],
                schedule: Schedule::Manual,
            },
            Timestamp::now_utc(),
        ))
    }

    #[tokio::test]
    async fn given_duplicate_id_when_insert_should_conflict() {
        let store = WebhookStoreMemory::new();
        let row = row("hook");
        store.insert(&row).await.unwrap();
        assert_eq!(
            store.insert(&row).await.unwrap_err(),
            WebhookRepositoryError::Conflict
        );
    }

    #[tokio::test]
    async fn given_missing_row_when_update_should_return_not_found() {
        let store = WebhookStoreMemory::new();
        assert_eq!(
            store.update(&row("hook")).await.unwrap_err(),
            WebhookRepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn given_stale_timestamp_when_record_execution_should_keep_newer_outcome() {
        let store = WebhookStoreMemory::new();
        let row = row("hook");
        store.insert(&row).await.unwrap();

        let newer = OffsetDateTime::now_utc();
        let older = newer - time::Duration::seconds(10);
        store
            .record_execution(row.id, newer, "success")
            .await
            .unwrap();
        let stored = store.record_execution(row.id, older, "error").await.unwrap();

        assert_eq!(stored.last_executed_at, Some(newer));
        assert_eq!(stored.last_execution_status.as_deref(), Some("success"));
    }

    #[tokio::test]
    async fn given_rows_when_list_should_return_newest_first() {
        let store = WebhookStoreMemory::new();
        let mut first = row("older");
        first.created_at = OffsetDateTime::now_utc() - time::Duration::hours(1);
        let second = row("newer");
        store.insert(&first).await.unwrap();
        store.insert(&second).await.unwrap();

        let listed = store.list().await.unwrap();

        assert_eq!(listed[0].name, "newer");
        assert_eq!(listed[1].name, "older");
    }
}
