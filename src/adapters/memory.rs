use crate::domain::model::Execution;
use crate::domain::ports::ExecutionStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

/// Default backend: keeps executions in process memory. Used for local runs
/// and tests; deployments wanting durable records enable the postgres
/// feature instead.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    executions: Mutex<Vec<Execution>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.executions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ExecutionStore for InMemoryStore {
    async fn add_execution(&self, commands: i32, result: i64, duration: f64)
        -> Result<Execution> {
        let mut executions = self.executions.lock().await;
        let execution = Execution {
            id: executions.len() as i64 + 1,
            commands,
            result,
            duration,
            timestamp: Utc::now(),
        };
        executions.push(execution.clone());
        Ok(execution)
    }

    async fn fetch_execution(&self, id: i64) -> Result<Option<Execution>> {
        let executions = self.executions.lock().await;
        Ok(executions.iter().find(|e| e.id == id).cloned())
    }
}
