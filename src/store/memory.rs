use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::TaskStore;
use crate::error::StoreError;
use crate::routes::tasks::{Task, TaskPayload};

/// In-memory task store, the test double for [`MySqlTaskStore`].
///
/// Mirrors the observable behavior of the real table: ids come from an
/// auto-increment counter, `title` cannot be NULL, writes report how many
/// rows they matched, listing follows id order, and a non-numeric id
/// matches nothing. `inject_error` queues a failure for the next call so
/// tests can exercise the 500 path.
///
/// [`MySqlTaskStore`]: super::MySqlTaskStore
pub struct InMemoryTaskStore {
    rows: Mutex<BTreeMap<i64, Task>>,
    next_id: AtomicI64,
    fail_next: Mutex<Option<StoreError>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            fail_next: Mutex::new(None),
        }
    }

    /// Queue an error; the next store call returns it instead of running.
    pub fn inject_error(&self, error: StoreError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    fn take_injected(&self) -> Result<(), StoreError> {
        match self.fail_next.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

// Non-numeric ids match nothing. Permissive MySQL coerces them to 0 with
// the same outcome; strict servers reject data-change statements instead.
fn numeric_id(id: &str) -> Option<i64> {
    id.parse().ok()
}

fn required_title(task: &TaskPayload) -> Result<String, StoreError> {
    task.title()
        .map(str::to_string)
        .ok_or_else(|| StoreError::Database("column 'title' cannot be null".to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, task: &TaskPayload) -> Result<(), StoreError> {
        self.take_injected()?;
        let title = required_title(task)?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = Task {
            id,
            title,
            description: task.description().map(str::to_string),
            due_date: task.due_date().map(str::to_string),
        };
        self.rows.lock().unwrap().insert(id, row);

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.take_injected()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Task>, StoreError> {
        self.take_injected()?;
        let id = match numeric_id(id) {
            Some(id) => id,
            None => return Ok(None),
        };
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: &str, task: &TaskPayload) -> Result<u64, StoreError> {
        self.take_injected()?;
        let id = match numeric_id(id) {
            Some(id) => id,
            None => return Ok(0),
        };

        let mut rows = self.rows.lock().unwrap();
        // A statement that matches nothing succeeds with zero rows; the
        // NOT NULL constraint only fires once a row is being written.
        if !rows.contains_key(&id) {
            return Ok(0);
        }
        let title = required_title(task)?;

        rows.insert(
            id,
            Task {
                id,
                title,
                description: task.description().map(str::to_string),
                due_date: task.due_date().map(str::to_string),
            },
        );
        Ok(1)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        self.take_injected()?;
        let id = match numeric_id(id) {
            Some(id) => id,
            None => return Ok(0),
        };
        match self.rows.lock().unwrap().remove(&id) {
            Some(_) => Ok(1),
            None => Ok(0),
        }
    }
}
