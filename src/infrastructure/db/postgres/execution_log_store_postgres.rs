use crate::infrastructure::db::dto::ExecutionLogRow;
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::stores::execution_log_store::{
    ExecutionLogFilter, ExecutionLogRepositoryError, ExecutionLogStore,
};
use async_trait::async_trait;
use sqlx::PgConnection;

#[derive(Clone)]
pub struct ExecutionLogStorePostgres {
    db: std::sync::Arc<PostgresDatabase>,
}

impl ExecutionLogStorePostgres {
    /// Build a Postgres-backed execution log store.
    pub fn new(db: std::sync::Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    async fn insert_impl_conn(
        conn: &mut PgConnection,
        row: &ExecutionLogRow,
        max_entries_per_webhook: usize,
    ) -> Result<ExecutionLogRow, ExecutionLogRepositoryError> {
        let stored = sqlx::query_as::<_, ExecutionLogRow>(
            "INSERT INTO webhook_logs (
                id,
                webhook_id,
                webhook_name,
                timestamp,
                request_url,
                request_method,
                request_headers,
                request_body,
                response_status,
                response_headers,
                response_body,
                duration_ms,
                success,
                error
            )
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13,$14)
            ON CONFLICT DO NOTHING
            RETURNING
                id,
                webhook_id,
                webhook_name,
                timestamp,
                request_url,
                request_method,
                request_headers,
                request_body,
                response_status,
                response_headers,
                response_body,
                duration_ms,
                success,
                error",
        )
        .bind(row.id)
        .bind(row.webhook_id)
        .bind(&row.webhook_name)
        .bind(row.timestamp)
        .bind(&row.request_url)
        .bind(&row.request_method)
        .bind(&row.request_headers)
        .bind(&row.request_body)
        .bind(row.response_status)
        .bind(&row.response_headers)
        .bind(&row.response_body)
        .bind(row.duration_ms)
        .bind(row.success)
        .bind(&row.error)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|_| ExecutionLogRepositoryError::StorageUnavailable)?;

        let Some(stored) = stored else {
            return Err(ExecutionLogRepositoryError::Conflict);
        };

        // Evict oldest entries beyond the retention cap for this webhook.
        sqlx::query(
            "DELETE FROM webhook_logs
            WHERE webhook_id = $1
              AND id NOT IN (
                SELECT id FROM webhook_logs
                WHERE webhook_id = $1
                ORDER BY timestamp DESC
                LIMIT $2
              )",
        )
        .bind(row.webhook_id)
        .bind(max_entries_per_webhook as i64)
        .execute(&mut *conn)
        .await
        .map_err(|_| ExecutionLogRepositoryError::StorageUnavailable)?;

        Ok(stored)
    }

    async fn query_impl_conn(
        conn: &mut PgConnection,
        filter: &ExecutionLogFilter,
    ) -> Result<Vec<ExecutionLogRow>, ExecutionLogRepositoryError> {
        let rows = sqlx::query_as::<_, ExecutionLogRow>(
            "SELECT
                id,
                webhook_id,
                webhook_name,
                timestamp,
                request_url,
                request_method,
                request_headers,
                request_body,
                response_status,
                response_headers,
                response_body,
                duration_ms,
                success,
                error
            FROM webhook_logs
            WHERE ($1::uuid IS NULL OR webhook_id = $1)
              AND ($2::text IS NULL
                   OR webhook_name ILIKE '%' || $2 || '%'
                   OR request_url ILIKE '%' || $2 || '%'
                   OR CAST(response_status AS TEXT) LIKE '%' || $2 || '%'
                   OR COALESCE(error, '') ILIKE '%' || $2 || '%')
            ORDER BY timestamp DESC",
        )
        .bind(filter.webhook_id)
        .bind(filter.search.as_deref())
        .fetch_all(&mut *conn)
        .await
        .map_err(|_| ExecutionLogRepositoryError::StorageUnavailable)?;

        Ok(rows)
    }

    async fn delete_by_webhook_impl_conn(
        conn: &mut PgConnection,
        webhook_id: uuid::Uuid,
    ) -> Result<u64, ExecutionLogRepositoryError> {
        let result = sqlx::query("DELETE FROM webhook_logs WHERE webhook_id = $1")
            .bind(webhook_id)
            .execute(&mut *conn)
            .await
            .map_err(|_| ExecutionLogRepositoryError::StorageUnavailable)?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ExecutionLogStore for ExecutionLogStorePostgres {
    async fn insert(
        &self,
        row: &ExecutionLogRow,
        max_entries_per_webhook: usize,
    ) -> Result<ExecutionLogRow, ExecutionLogRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| {
                let row = row;
                Box::pin(async move {
                    Self::insert_impl_conn(conn, &row, max_entries_per_webhook).await
                })
            })
            .await
    }

    async fn query(
        &self,
        filter: &ExecutionLogFilter,
    ) -> Result<Vec<ExecutionLogRow>, ExecutionLogRepositoryError> {
        let filter = filter.clone();
        self.db
            .with_conn(move |conn| {
                let filter = filter;
                Box::pin(async move { Self::query_impl_conn(conn, &filter).await })
            })
            .await
    }

    async fn delete_by_webhook(
        &self,
        webhook_id: uuid::Uuid,
    ) -> Result<u64, ExecutionLogRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::delete_by_webhook_impl_conn(conn, webhook_id)))
            .await
    }
}
