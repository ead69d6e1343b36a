use crate::domain::model::Execution;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence seam for execution records. The store assigns the id and the
/// timestamp; callers hand over what they measured.
#[async_trait]
pub trait ExecutionStore: Send + Sync {
    async fn add_execution(&self, commands: i32, result: i64, duration: f64)
        -> Result<Execution>;

    async fn fetch_execution(&self, id: i64) -> Result<Option<Execution>>;
}
