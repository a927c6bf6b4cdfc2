use crate::infrastructure::db::dto::WebhookRow;
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::stores::webhook_store::{WebhookRepositoryError, WebhookStore};
use async_trait::async_trait;
use sqlx::PgConnection;
use time::OffsetDateTime;

#[derive(Clone)]
pub struct WebhookStorePostgres {
    db: std::sync::Arc<PostgresDatabase>,
}

impl WebhookStorePostgres {
    /// Build a Postgres-backed webhook store.
    pub fn new(db: std::sync::Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    async fn get_impl_conn(
        conn: &mut PgConnection,
        webhook_id: uuid::Uuid,
    ) -> Result<Option<WebhookRow>, WebhookRepositoryError> {
        let row = sqlx::query_as::<_, WebhookRow>(
            "SELECT
                id,
                name,
                description,
                url,
                method,
                headers,
                params,
                body,
                enabled,
                tags,
                schedule,
                last_executed_at,
                last_execution_status,
                created_at,
                updated_at
            FROM webhooks
            WHERE id = $1",
        )
        .bind(webhook_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;

        Ok(row)
    }

    async fn list_impl_conn(
        conn: &mut PgConnection,
    ) -> Result<Vec<WebhookRow>, WebhookRepositoryError> {
        let rows = sqlx::query_as::<_, WebhookRow>(
            "SELECT
                id,
                name,
                description,
                url,
                method,
                headers,
                params,
                body,
                enabled,
                tags,
                schedule,
                last_executed_at,
                last_execution_status,
                created_at,
                updated_at
            FROM webhooks
            ORDER BY created_at DESC",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;

        Ok(rows)
    }

    async fn insert_impl_conn(
        conn: &mut PgConnection,
        row: &WebhookRow,
    ) -> Result<WebhookRow, WebhookRepositoryError> {
        let stored = sqlx::query_as::<_, WebhookRow>(
            "INSERT INTO webhooks (
                id,
                name,
                description,
                url,
                method,
                headers,
                params,
                body,
                enabled,
                tags,
                schedule,
                last_executed_at,
                last_execution_status,
                created_at,
                updated_at
            )
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13,$14,$15)
            ON CONFLICT DO NOTHING
            RETURNING
                id,
                name,
                description,
                url,
                method,
                headers,
                params,
                body,
                enabled,
                tags,
                schedule,
                last_executed_at,
                last_execution_status,
                created_at,
                updated_at",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.description)
        .bind(&row.url)
        .bind(&row.method)
        .bind(&row.headers)
        .bind(&row.params)
        .bind(&row.body)
        .bind(row.enabled)
        .bind(&row.tags)
        .bind(&row.schedule)
        .bind(row.last_executed_at)
        .bind(&row.last_execution_status)
        .bind(row.created_at)
        .bind(row.updated_at)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;

        match stored {
            Some(row) => Ok(row),
            None => Err(WebhookRepositoryError::Conflict),
        }
    }

    async fn update_impl_conn(
        conn: &mut PgConnection,
        row: &WebhookRow,
    ) -> Result<WebhookRow, WebhookRepositoryError> {
        let stored = sqlx::query_as::<_, WebhookRow>(
            "UPDATE webhooks SET
                name = $2,
                description = $3,
                url = $4,
                method = $5,
                headers = $6,
                params = $7,
                body = $8,
                enabled = $9,
                tags = $10,
                schedule = $11,
                last_executed_at = $12,
                last_execution_status = $13,
                updated_at = $14
            WHERE id = $1
            RETURNING
                id,
                name,
                description,
                url,
                method,
                headers,
                params,
                body,
                enabled,
                tags,
                schedule,
                last_executed_at,
                last_execution_status,
                created_at,
                updated_at",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.description)
        .bind(&row.url)
        .bind(&row.method)
        .bind(&row.headers)
        .bind(&row.params)
        .bind(&row.body)
        .bind(row.enabled)
        .bind(&row.tags)
        .bind(&row.schedule)
        .bind(row.last_executed_at)
        .bind(&row.last_execution_status)
        .bind(row.updated_at)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;

        match stored {
            Some(row) => Ok(row),
            None => Err(WebhookRepositoryError::NotFound),
        }
    }

    async fn delete_impl_conn(
        conn: &mut PgConnection,
        webhook_id: uuid::Uuid,
    ) -> Result<(), WebhookRepositoryError> {
        let result = sqlx::query("DELETE FROM webhooks WHERE id = $1")
            .bind(webhook_id)
            .execute(&mut *conn)
            .await
            .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;

        if result.rows_affected() == 0 {
            return Err(WebhookRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn record_execution_impl_conn(
        conn: &mut PgConnection,
        webhook_id: uuid::Uuid,
        executed_at: OffsetDateTime,
        status: &str,
    ) -> Result<WebhookRow, WebhookRepositoryError> {
        // Guarded write: a completion older than the recorded one is a no-op.
        let updated = sqlx::query_as::<_, WebhookRow>(
            "UPDATE webhooks SET
                last_executed_at = $2,
                last_execution_status = $3,
                updated_at = $2
            WHERE id = $1
              AND (last_executed_at IS NULL OR last_executed_at <= $2)
            RETURNING
                id,
                name,
                description,
                url,
                method,
                headers,
                params,
                body,
                enabled,
                tags,
                schedule,
                last_executed_at,
                last_execution_status,
                created_at,
                updated_at",
        )
        .bind(webhook_id)
        .bind(executed_at)
        .bind(status)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;

        if let Some(row) = updated {
            return Ok(row);
        }

        // Guard skipped the write; return the stored row unchanged.
        match Self::get_impl_conn(conn, webhook_id).await? {
            Some(row) => Ok(row),
            None => Err(WebhookRepositoryError::NotFound),
        }
    }
}

#[async_trait]
impl WebhookStore for WebhookStorePostgres {
    async fn get(
        &self,
        webhook_id: uuid::Uuid,
    ) -> Result<Option<WebhookRow>, WebhookRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::get_impl_conn(conn, webhook_id)))
            .await
    }

    async fn list(&self) -> Result<Vec<WebhookRow>, WebhookRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::list_impl_conn(conn)))
            .await
    }

    async fn insert(&self, row: &WebhookRow) -> Result<WebhookRow, WebhookRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| {
                let row = row;
                Box::pin(async move { Self::insert_impl_conn(conn, &row).await })
            })
            .await
    }

    async fn update(&self, row: &WebhookRow) -> Result<WebhookRow, WebhookRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| {
                let row = row;
                Box::pin(async move { Self::update_impl_conn(conn, &row).await })
            })
            .await
    }

    async fn delete(&self, webhook_id: uuid::Uuid) -> Result<(), WebhookRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::delete_impl_conn(conn, webhook_id)))
            .await
    }

    async fn record_execution(
        &self,
        webhook_id: uuid::Uuid,
        executed_at: OffsetDateTime,
        status: &str,
    ) -> Result<WebhookRow, WebhookRepositoryError> {
        let status = status.to_string();
        self.db
            .with_conn(move |conn| {
                let status = status;
                Box::pin(async move {
                    Self::record_execution_impl_conn(conn, webhook_id, executed_at, &status).await
                })
            })
            .await
    }
}
