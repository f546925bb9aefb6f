use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use super::TaskStore;
use crate::config::Config;
use crate::error::StoreError;
use crate::routes::tasks::{Task, TaskPayload};

/// Pooled connections. Compiled in rather than configured.
pub const POOL_SIZE: u32 = 10;

/// MySQL-backed task store.
///
/// Every call runs a single parameterized statement on a connection
/// borrowed from the pool; the pool takes the connection back when the call
/// finishes, on the error path included. When all connections are checked
/// out, acquisition suspends the caller until one frees (bounded by the
/// pool's acquire timeout).
#[derive(Debug, Clone)]
pub struct MySqlTaskStore {
    pool: MySqlPool,
}

impl MySqlTaskStore {
    /// Connect to the configured database and establish the pool. Eager:
    /// a first connection is opened before this returns, so a bad host or
    /// credential fails here instead of on the first request.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let options = MySqlConnectOptions::new()
            .host(&config.db_host)
            .username(&config.db_user)
            .password(&config.db_password)
            .database(&config.db_database);

        let pool = MySqlPoolOptions::new()
            .max_connections(POOL_SIZE)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Direct pool access, for the integration tests.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl TaskStore for MySqlTaskStore {
    async fn create(&self, task: &TaskPayload) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO tasks (title, description, dueDate) VALUES (?, ?, ?)")
            .bind(task.title())
            .bind(task.description())
            .bind(task.due_date())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let tasks = sqlx::query_as::<_, Task>("SELECT id, title, description, dueDate FROM tasks")
            .fetch_all(&self.pool)
            .await?;

        Ok(tasks)
    }

    async fn get(&self, id: &str) -> Result<Option<Task>, StoreError> {
        let task =
            sqlx::query_as::<_, Task>("SELECT id, title, description, dueDate FROM tasks WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(task)
    }

    async fn update(&self, id: &str, task: &TaskPayload) -> Result<u64, StoreError> {
        let result =
            sqlx::query("UPDATE tasks SET title = ?, description = ?, dueDate = ? WHERE id = ?")
                .bind(task.title())
                .bind(task.description())
                .bind(task.due_date())
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
