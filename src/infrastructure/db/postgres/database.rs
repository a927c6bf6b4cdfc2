use crate::infrastructure::db::database::DatabaseError;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::future::Future;
use std::pin::Pin;

pub struct PostgresDatabase {
    pool: PgPool,
}

impl PostgresDatabase {
    pub async fn connect(url: &str) -> Result<Self, DatabaseError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Run a closure against a pooled connection. Acquisition failures
    /// surface through the caller's error type via `From<DatabaseError>`.
    pub async fn with_conn<T, E, F>(&self, f: F) -> Result<T, E>
    where
        for<'c> F: FnOnce(
            &'c mut sqlx::PgConnection,
        ) -> Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'c>>,
        E: From<DatabaseError>,
    {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        f(&mut conn).await
    }
}

#[cfg(test)]
mod tests {
    use super::PostgresDatabase;
    use crate::infrastructure::db::database::DatabaseError;

    fn test_db_url() -> Option<String> {
        std::env::var("DATABASE_URL").ok()
    }

    #[tokio::test]
    async fn given_connection_when_with_conn_should_run_query_and_return_value() {
        let Some(url) = test_db_url() else {
            return;
        };
        let db = PostgresDatabase::connect(&url).await.unwrap();

        let value: i64 = db
            .with_conn(|conn| {
                Box::pin(async move {
                    let v = sqlx::query_scalar::<_, i64>("SELECT 1")
                        .fetch_one(conn)
                        .await
                        .map_err(|e| DatabaseError::Query(e.to_string()))?;
                    Ok::<i64, DatabaseError>(v)
                })
            })
            .await
            .unwrap();

        assert_eq!(value, 1);
    }

    #[tokio::test]
    async fn given_bad_url_when_connect_should_return_connection_error() {
        let result = PostgresDatabase::connect("postgres://nobody@127.0.0.1:1/nope").await;
        assert!(matches!(result, Err(DatabaseError::Connection(_))));
    }
}
