use crate::infrastructure::db::dto::IncomingWebhookRow;
use crate::infrastructure::db::stores::incoming_webhook_store::{
    IncomingWebhookRepositoryError, IncomingWebhookStore,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local incoming-endpoint store.
#[derive(Default)]
pub struct IncomingWebhookStoreMemory {
    rows: Mutex<HashMap<uuid::Uuid, IncomingWebhookRow>>,
}

impl IncomingWebhookStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IncomingWebhookStore for IncomingWebhookStoreMemory {
    async fn get(
        &self,
        incoming_webhook_id: uuid::Uuid,
    ) -> Result<Option<IncomingWebhookRow>, IncomingWebhookRepositoryError> {
        Ok(self.rows.lock().unwrap().get(&incoming_webhook_id).cloned())
    }

    async fn list(&self) -> Result<Vec<IncomingWebhookRow>, IncomingWebhookRepositoryError> {
        let mut rows: Vec<IncomingWebhookRow> =
            self.rows.lock().unwrap().values().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert(
        &self,
        row: &IncomingWebhookRow,
    ) -> Result<IncomingWebhookRow, IncomingWebhookRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&row.id) {
            return Err(IncomingWebhookRepositoryError::Conflict);
        }
        rows.insert(row.id, row.clone());
        Ok(row.clone())
    }

    async fn update(
        &self,
        row: &IncomingWebhookRow,
    ) -> Result<IncomingWebhookRow, IncomingWebhookRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&row.id) {
            return Err(IncomingWebhookRepositoryError::NotFound);
        }
        rows.insert(row.id, row.clone());
        Ok(row.clone())
    }

    async fn delete(
        &self,
        incoming_webhook_id: uuid::Uuid,
    ) -> Result<(), IncomingWebhookRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.remove(&incoming_webhook_id).is_none() {
            return Err(IncomingWebhookRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::incoming_webhook::{
        IncomingWebhookDefinition, IncomingWebhookDraft,
    };
    use crate::domain::value_objects::timestamps::Timestamp;

    fn row() -> IncomingWebhookRow {
        IncomingWebhookRow::from_definition(&IncomingWebhookDefinition::create(
            IncomingWebhookDraft {
                name: "ci events".to_string(),
                description: String::new(),
                enabled: true,
            },
            Timestamp::now_utc(),
        ))
    }

    #[tokio::test]
    async fn given_inserted_row_when_get_should_return_it() {
        let store = IncomingWebhookStoreMemory::new();
        let row = row();
        store.insert(&row).await.unwrap();
        assert_eq!(store.get(row.id).await.unwrap().unwrap().name, "ci events");
    }

    #[tokio::test]
    async fn given_missing_row_when_delete_should_return_not_found() {
        let store = IncomingWebhookStoreMemory::new();
        assert_eq!(
            store.delete(uuid::Uuid::new_v4()).await.unwrap_err(),
            IncomingWebhookRepositoryError::NotFound
        );
    }
}
