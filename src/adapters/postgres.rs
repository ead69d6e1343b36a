use crate::domain::model::Execution;
use crate::domain::ports::ExecutionStore;
use crate::utils::error::{CleanerError, Result};
use async_trait::async_trait;
use sqlx::postgres::PgPool;

/// Durable backend over Postgres. Connection and io failures classify as
/// transient (retried by the caller); constraint violations do not.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await.map_err(map_sqlx_error)?;
        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| CleanerError::StorageUnavailable {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl ExecutionStore for PostgresStore {
    async fn add_execution(&self, commands: i32, result: i64, duration: f64)
        -> Result<Execution> {
        sqlx::query_as::<_, Execution>(
            "INSERT INTO executions (commands, result, duration) \
             VALUES ($1, $2, $3) \
             RETURNING id, commands, result, duration, timestamp",
        )
        .bind(commands)
        .bind(result)
        .bind(duration)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn fetch_execution(&self, id: i64) -> Result<Option<Execution>> {
        sqlx::query_as::<_, Execution>(
            "SELECT id, commands, result, duration, timestamp \
             FROM executions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}

fn map_sqlx_error(err: sqlx::Error) -> CleanerError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => CleanerError::DuplicateRecord,
        _ => CleanerError::StorageUnavailable {
            message: err.to_string(),
        },
    }
}
