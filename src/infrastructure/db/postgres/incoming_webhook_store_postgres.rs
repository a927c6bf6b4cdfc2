use crate::infrastructure::db::dto::IncomingWebhookRow;
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::stores::incoming_webhook_store::{
    IncomingWebhookRepositoryError, IncomingWebhookStore,
};
use async_trait::async_trait;
use sqlx::PgConnection;

#[derive(Clone)]
pub struct IncomingWebhookStorePostgres {
    db: std::sync::Arc<PostgresDatabase>,
}

impl IncomingWebhookStorePostgres {
    /// Build a Postgres-backed incoming-endpoint store.
    pub fn new(db: std::sync::Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    async fn get_impl_conn(
        conn: &mut PgConnection,
        incoming_webhook_id: uuid::Uuid,
    ) -> Result<Option<IncomingWebhookRow>, IncomingWebhookRepositoryError> {
        let row = sqlx::query_as::<_, IncomingWebhookRow>(
            "SELECT
                id,
                name,
                description,
                endpoint_path,
                secret_key,
                enabled,
                last_called_at,
                created_at,
                updated_at
            FROM incoming_webhooks
            WHERE id = $1",
        )
        .bind(incoming_webhook_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|_| IncomingWebhookRepositoryError::StorageUnavailable)?;

        Ok(row)
    }

    async fn list_impl_conn(
        conn: &mut PgConnection,
    ) -> Result<Vec<IncomingWebhookRow>, IncomingWebhookRepositoryError> {
        let rows = sqlx::query_as::<_, IncomingWebhookRow>(
            "SELECT
                id,
                name,
                description,
                endpoint_path,
                secret_key,
                enabled,
                last_called_at,
                created_at,
                updated_at
            FROM incoming_webhooks
            ORDER BY created_at DESC",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|_| IncomingWebhookRepositoryError::StorageUnavailable)?;

        Ok(rows)
    }

    async fn insert_impl_conn(
        conn: &mut PgConnection,
        row: &IncomingWebhookRow,
    ) -> Result<IncomingWebhookRow, IncomingWebhookRepositoryError> {
        let stored = sqlx::query_as::<_, IncomingWebhookRow>(
            "INSERT INTO incoming_webhooks (
                id,
                name,
                description,
                endpoint_path,
                secret_key,
                enabled,
                last_called_at,
                created_at,
                updated_at
            )
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9)
            ON CONFLICT DO NOTHING
            RETURNING
                id,
                name,
                description,
                endpoint_path,
                secret_key,
                enabled,
                last_called_at,
                created_at,
                updated_at",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.description)
        .bind(&row.endpoint_path)
        .bind(&row.secret_key)
        .bind(row.enabled)
        .bind(row.last_called_at)
        .bind(row.created_at)
        .bind(row.updated_at)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|_| IncomingWebhookRepositoryError::StorageUnavailable)?;

        match stored {
            Some(row) => Ok(row),
            None => Err(IncomingWebhookRepositoryError::Conflict),
        }
    }

    async fn update_impl_conn(
        conn: &mut PgConnection,
        row: &IncomingWebhookRow,
    ) -> Result<IncomingWebhookRow, IncomingWebhookRepositoryError> {
        let stored = sqlx::query_as::<_, IncomingWebhookRow>(
            "UPDATE incoming_webhooks SET
                name = $2,
                description = $3,
                enabled = $4,
                last_called_at = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING
                id,
                name,
                description,
                endpoint_path,
                secret_key,
                enabled,
                last_called_at,
                created_at,
                updated_at",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.description)
        .bind(row.enabled)
        .bind(row.last_called_at)
        .bind(row.updated_at)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|_| IncomingWebhookRepositoryError::StorageUnavailable)?;

        match stored {
            Some(row) => Ok(row),
            None => Err(IncomingWebhookRepositoryError::NotFound),
        }
    }

    async fn delete_impl_conn(
        conn: &mut PgConnection,
        incoming_webhook_id: uuid::Uuid,
    ) -> Result<(), IncomingWebhookRepositoryError> {
        let result = sqlx::query("DELETE FROM incoming_webhooks WHERE id = $1")
            .bind(incoming_webhook_id)
            .execute(&mut *conn)
            .await
            .map_err(|_| IncomingWebhookRepositoryError::StorageUnavailable)?;

        if result.rows_affected() == 0 {
            return Err(IncomingWebhookRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl IncomingWebhookStore for IncomingWebhookStorePostgres {
    async fn get(
        &self,
        incoming_webhook_id: uuid::Uuid,
    ) -> Result<Option<IncomingWebhookRow>, IncomingWebhookRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::get_impl_conn(conn, incoming_webhook_id)))
            .await
    }

    async fn list(&self) -> Result<Vec<IncomingWebhookRow>, IncomingWebhookRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::list_impl_conn(conn)))
            .await
    }

    async fn insert(
        &self,
        row: &IncomingWebhookRow,
    ) -> Result<IncomingWebhookRow, IncomingWebhookRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| {
                let row = row;
                Box::pin(async move { Self::insert_impl_conn(conn, &row).await })
            })
            .await
    }

    async fn update(
        &self,
        row: &IncomingWebhookRow,
    ) -> Result<IncomingWebhookRow, IncomingWebhookRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| {
                let row = row;
                Box::pin(async move { Self::update_impl_conn(conn, &row).await })
            })
            .await
    }

    async fn delete(
        &self,
        incoming_webhook_id: uuid::Uuid,
    ) -> Result<(), IncomingWebhookRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::delete_impl_conn(conn, incoming_webhook_id)))
            .await
    }
}
