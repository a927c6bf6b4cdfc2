use crate::infrastructure::db::dto::ExecutionLogRow;
use crate::infrastructure::db::stores::execution_log_store::{
    ExecutionLogFilter, ExecutionLogRepositoryError, ExecutionLogStore,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// Process-local append-only log store with per-webhook retention.
#[derive(Default)]
pub struct ExecutionLogStoreMemory {
    rows: Mutex<Vec<ExecutionLogRow>>,
}

impl ExecutionLogStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_search(row: &ExecutionLogRow, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    row.webhook_name.to_lowercase().contains(&needle)
        || row.request_url.to_lowercase().contains(&needle)
        || row.response_status.to_string().contains(&needle)
        || row
            .error
            .as_deref()
            .map(|e| e.to_lowercase().contains(&needle))
            .unwrap_or(false)
}

#[async_trait]
impl ExecutionLogStore for ExecutionLogStoreMemory {
    async fn insert(
        &self,
        row: &ExecutionLogRow,
        max_entries_per_webhook: usize,
    ) -> Result<ExecutionLogRow, ExecutionLogRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|stored| stored.id == row.id) {
            return Err(ExecutionLogRepositoryError::Conflict);
        }
        rows.push(row.clone());

        // Evict oldest entries beyond the retention cap for this webhook.
        let mut owned: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, stored)| stored.webhook_id == row.webhook_id)
            .map(|(index, _)| index)
            .collect();
        if owned.len() > max_entries_per_webhook {
            owned.sort_by(|a, b| rows[*a].timestamp.cmp(&rows[*b].timestamp));
            let excess: Vec<uuid::Uuid> = owned
                .iter()
                .take(owned.len() - max_entries_per_webhook)
                .map(|index| rows[*index].id)
                .collect();
            rows.retain(|stored| !excess.contains(&stored.id));
        }

        Ok(row.clone())
    }

    async fn query(
        &self,
        filter: &ExecutionLogFilter,
    ) -> Result<Vec<ExecutionLogRow>, ExecutionLogRepositoryError> {
        let rows = self.rows.lock().unwrap();
        let mut matched: Vec<ExecutionLogRow> = rows
            .iter()
            .filter(|row| {
                filter
                    .webhook_id
                    .map(|id| row.webhook_id == id)
                    .unwrap_or(true)
            })
            .filter(|row| {
                filter
                    .search
                    .as_deref()
                    .map(|needle| matches_search(row, needle))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(matched)
    }

    async fn delete_by_webhook(
        &self,
        webhook_id: uuid::Uuid,
    ) -> Result<u64, ExecutionLogRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.webhook_id != webhook_id);
        Ok((before - rows.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::execution_log::ExecutionLogEntry;
    use crate::domain::entities::webhook::HttpMethod;
    use crate::domain::value_objects::ids::{LogEntryId, WebhookId};
    use crate::domain::value_objects::timestamps::Timestamp;
    use std::collections::BTreeMap;
    use time::OffsetDateTime;

    fn entry(webhook_id: WebhookId, name: &str, unix: i64) -> ExecutionLogRow {
        ExecutionLogRow::from_entry(&ExecutionLogEntry {
            id: LogEntryId::new(),
            webhook_id,
            webhook_name: name.to_string(),
            timestamp: Timestamp::from(OffsetDateTime::from_unix_timestamp(unix).unwrap()),
            request_url: "https://api.example.com/status".to_string(),
            request_method: HttpMethod::Get,
            request_headers: BTreeMap::new(),
            request_body: None,
            response_status: 200,
            response_headers: BTreeMap::new(),
            response_body: None,
            duration_ms: 10,
            success: true,
            error: None,
        })
    }

    #[tokio::test]
    async fn given_entries_when_query_should_return_newest_first() {
        let store = ExecutionLogStoreMemory::new();
        let webhook_id = WebhookId::new();
        store
            .insert(&entry(webhook_id, "hook", 1_000), 100)
            .await
            .unwrap();
        store
            .insert(&entry(webhook_id, "hook", 3_000), 100)
            .await
            .unwrap();
        store
            .insert(&entry(webhook_id, "hook", 2_000), 100)
            .await
            .unwrap();

        let rows = store.query(&ExecutionLogFilter::default()).await.unwrap();

        let stamps: Vec<i64> = rows.iter().map(|r| r.timestamp.unix_timestamp()).collect();
        assert_eq!(stamps, vec![3_000, 2_000, 1_000]);
    }

    #[tokio::test]
    async fn given_webhook_filter_when_query_should_restrict_to_owner() {
        let store = ExecutionLogStoreMemory::new();
        let mine = WebhookId::new();
        let other = WebhookId::new();
        store.insert(&entry(mine, "mine", 1_000), 100).await.unwrap();
        store
            .insert(&entry(other, "other", 2_000), 100)
            .await
            .unwrap();

        let rows = store
            .query(&ExecutionLogFilter {
                webhook_id: Some(mine.0),
                search: None,
            })
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].webhook_name, "mine");
    }

    #[tokio::test]
    async fn given_search_text_when_query_should_match_case_insensitively() {
        let store = ExecutionLogStoreMemory::new();
        let webhook_id = WebhookId::new();
        store
            .insert(&entry(webhook_id, "Deploy Hook", 1_000), 100)
            .await
            .unwrap();
        let mut failed = entry(webhook_id, "other", 2_000);
        failed.response_status = 0;
        failed.success = false;
        failed.error = Some("Connection Refused".to_string());
        store.insert(&failed, 100).await.unwrap();

        let by_name = store
            .query(&ExecutionLogFilter {
                webhook_id: None,
                search: Some("deploy".to_string()),
            })
            .await
            .unwrap();
        let by_error = store
            .query(&ExecutionLogFilter {
                webhook_id: None,
                search: Some("refused".to_string()),
            })
            .await
            .unwrap();
        let by_status = store
            .query(&ExecutionLogFilter {
                webhook_id: None,
                search: Some("200".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(by_name.len(), 1);
        assert_eq!(by_error.len(), 1);
        assert_eq!(by_status.len(), 1);
    }

    #[tokio::test]
    async fn given_both_filters_when_query_should_and_compose() {
        let store = ExecutionLogStoreMemory::new();
        let mine = WebhookId::new();
        let other = WebhookId::new();
        store
            .insert(&entry(mine, "deploy", 1_000), 100)
            .await
            .unwrap();
        store
            .insert(&entry(other, "deploy", 2_000), 100)
            .await
            .unwrap();

        let rows = store
            .query(&ExecutionLogFilter {
                webhook_id: Some(mine.0),
                search: Some("deploy".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].webhook_id, mine.0);
    }

    #[tokio::test]
    async fn given_retention_cap_when_insert_should_evict_oldest_for_that_webhook() {
        let store = ExecutionLogStoreMemory::new();
        let webhook_id = WebhookId::new();
        let other = WebhookId::new();
        store
            .insert(&entry(other, "other", 500), 2)
            .await
            .unwrap();
        for unix in [1_000, 2_000, 3_000] {
            store
                .insert(&entry(webhook_id, "hook", unix), 2)
                .await
                .unwrap();
        }

        let mine = store
            .query(&ExecutionLogFilter {
                webhook_id: Some(webhook_id.0),
                search: None,
            })
            .await
            .unwrap();
        let others = store
            .query(&ExecutionLogFilter {
                webhook_id: Some(other.0),
                search: None,
            })
            .await
            .unwrap();

        let stamps: Vec<i64> = mine.iter().map(|r| r.timestamp.unix_timestamp()).collect();
        assert_eq!(stamps, vec![3_000, 2_000]);
        assert_eq!(others.len(), 1);
    }

    #[tokio::test]
    async fn given_delete_by_webhook_when_called_should_remove_only_its_entries() {
        let store = ExecutionLogStoreMemory::new();
        let mine = WebhookId::new();
        let other = WebhookId::new();
        store.insert(&entry(mine, "mine", 1_000), 100).await.unwrap();
        store.insert(&entry(mine, "mine", 2_000), 100).await.unwrap();
        store
            .insert(&entry(other, "other", 3_000), 100)
            .await
            .unwrap();

        let removed = store.delete_by_webhook(mine.0).await.unwrap();

        assert_eq!(removed, 2);
        let remaining = store.query(&ExecutionLogFilter::default()).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].webhook_id, other.0);
    }
}
