//! Service layer orchestrating task operations over the repository port.

use crate::task::{
    domain::{Task, TaskDomainError, TaskFilter, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
    services::export,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed; surfaced to callers as a client error.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The operation targeted a nonexistent task.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed; propagated unmodified for the transport
    /// layer to map to a server error.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// Spreadsheet generation failed.
    #[error("task export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Holds no per-request state; each operation is a single unit of work
/// against the repository with no internal retries. Consistency under
/// concurrent writes to the same task is whatever the underlying store
/// provides: two racing completions resolve as last-writer-wins on the
/// completion timestamp.
#[derive(Clone)]
pub struct TasksService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TasksService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new tasks service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is empty or
    /// whitespace-only, or [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let task = Task::new(title, request.description, request.due_date, &*self.clock);
        let created = self.repository.create(&task).await?;
        info!(task_id = %display_id(&created), "task created");
        Ok(created)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.get(id).await?)
    }

    /// Retrieves tasks matching the filter, ordered by ascending identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn get_tasks(&self, filter: &TaskFilter) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list(filter).await?)
    }

    /// Marks a task as completed.
    ///
    /// Completion is idempotent: a task that is already completed keeps its
    /// original completion timestamp, though the edit still round-trips
    /// through storage. The unconditional entity transition is therefore
    /// only invoked for pending tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task with the
    /// identifier exists (including a concurrent deletion between the fetch
    /// and the edit), or [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn complete_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self
            .repository
            .get(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;

        if task.status() == TaskStatus::Pending {
            task.mark_completed(&*self.clock);
        }

        let updated = self
            .repository
            .edit(&task)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        info!(task_id = %id, "task completed");
        Ok(updated)
    }

    /// Deletes a task by identifier.
    ///
    /// Returns whether a task was removed; deleting an unknown or
    /// already-deleted identifier yields `false`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the deletion fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<bool> {
        let removed = self.repository.delete(id).await?;
        debug!(task_id = %id, removed, "task delete");
        Ok(removed)
    }

    /// Renders the full task collection as an XLSX workbook.
    ///
    /// No filters are applied; row order follows the repository listing
    /// (ascending identifier). An empty collection yields a valid workbook
    /// containing only the header row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails or
    /// [`TaskServiceError::Export`] when workbook generation fails.
    pub async fn export_tasks_table(&self) -> TaskServiceResult<Vec<u8>> {
        let all_tasks = self.repository.list(&TaskFilter::default()).await?;
        debug!(task_count = all_tasks.len(), "rendering task export");
        Ok(export::render_tasks_workbook(&all_tasks)?)
    }
}

/// Formats a possibly-unassigned identifier for log output.
fn display_id(task: &Task) -> String {
    task.id()
        .map_or_else(|| "unassigned".to_owned(), |id| id.to_string())
}
