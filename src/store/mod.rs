use async_trait::async_trait;

use crate::error::StoreError;
use crate::routes::tasks::{Task, TaskPayload};

pub mod memory;
pub mod mysql;

pub use memory::InMemoryTaskStore;
pub use mysql::MySqlTaskStore;

/// Data access for task rows: one method per statement the service issues.
///
/// Writes report the driver's affected-row count; zero means no row matched
/// and is the caller's not-found signal. Implementations must be shareable
/// across concurrent request handlers.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert a new row from the submitted fields. The generated id is not
    /// reported back.
    async fn create(&self, task: &TaskPayload) -> Result<(), StoreError>;

    /// Fetch every row in the table.
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    /// Fetch the row matching `id`, if any. The id is bound exactly as it
    /// appeared in the request path, so coercing a non-numeric value is the
    /// store's business.
    async fn get(&self, id: &str) -> Result<Option<Task>, StoreError>;

    /// Replace the three mutable fields of the row matching `id`, returning
    /// the affected-row count.
    async fn update(&self, id: &str, task: &TaskPayload) -> Result<u64, StoreError>;

    /// Delete the row matching `id`, returning the affected-row count.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;
}
