//! Repository port for task persistence, lookup, and deletion.

use crate::task::domain::{Task, TaskFilter, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Absence is not an error: lookups return `None` and deletion reports
/// whether a record was removed. Every adapter implements the full filter
/// semantics of [`TaskFilter`] and returns listings ordered by ascending
/// identifier.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a new task and assigns it a fresh identifier.
    ///
    /// Returns the stored entity including the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::AlreadyPersisted`] when the task
    /// already carries an identifier.
    async fn create(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Replaces the mutable fields of an existing task, keyed by identifier.
    ///
    /// Title, description, status, due date, and completion timestamp are
    /// replaced wholesale; the creation timestamp is never altered. Returns
    /// `None` when no task with the identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::MissingId`] when the task has never
    /// been persisted.
    async fn edit(&self, task: &Task) -> TaskRepositoryResult<Option<Task>>;

    /// Removes the task with the given identifier.
    ///
    /// Returns whether a record was removed; deleting an absent task yields
    /// `false`, making repeated deletion idempotent.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Returns tasks matching the filter, ordered by ascending identifier.
    async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A create was attempted with an already-assigned identifier.
    #[error("task {0} is already persisted")]
    AlreadyPersisted(TaskId),

    /// An edit was attempted on a task that has never been persisted.
    #[error("task has no identifier; persist it before editing")]
    MissingId,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
