//! In-memory task repository for tests and lightweight deployments.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{PersistedTaskData, Task, TaskFilter, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers come from a monotonically increasing counter starting at 1
/// and are never reused after deletion, matching the relational adapter's
/// sequence semantics. The ordered map keeps listings in ascending
/// identifier order. The full [`TaskFilter`] semantics are implemented, so
/// tests against this adapter exercise the same listing contract as the
/// relational adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i32,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Maps lock poisoning onto the repository's persistence error.
fn poisoned<T>(err: std::sync::PoisonError<T>) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Builds the stored representation of a task under the given identifier,
/// preserving the supplied creation timestamp.
fn stored_task(id: TaskId, task: &Task, created_at: chrono::DateTime<chrono::Utc>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id,
        title: task.title().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        status: task.status(),
        due_date: task.due_date(),
        completed_at: task.completed_at(),
        created_at,
    })
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: &Task) -> TaskRepositoryResult<Task> {
        if let Some(id) = task.id() {
            return Err(TaskRepositoryError::AlreadyPersisted(id));
        }

        let mut state = self.state.write().map_err(poisoned)?;
        state.last_id += 1;
        let id = TaskId::new(state.last_id);
        let stored = stored_task(id, task, task.created_at());
        state.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn edit(&self, task: &Task) -> TaskRepositoryResult<Option<Task>> {
        let id = task.id().ok_or(TaskRepositoryError::MissingId)?;
        let mut state = self.state.write().map_err(poisoned)?;

        let Some(existing) = state.tasks.get(&id) else {
            return Ok(None);
        };

        // Full replace of mutable fields; created_at stays as stored.
        let updated = stored_task(id, task, existing.created_at());
        state.tasks.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.tasks.remove(&id).is_some())
    }

    async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect())
    }
}
