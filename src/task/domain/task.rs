//! Task entity and its status transition.

use super::{ParseTaskStatusError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but not yet completed.
    Pending,
    /// Task has been completed.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task entity.
///
/// The identifier is `None` until the repository persists the task and the
/// store assigns one. `created_at` is stamped at construction and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: Option<TaskId>,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    due_date: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not-yet-persisted task.
    ///
    /// The task starts in [`TaskStatus::Pending`] with no identifier and a
    /// creation timestamp taken from the supplied clock.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: Option<String>,
        due_date: Option<DateTime<Utc>>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: None,
            title: title.into_inner(),
            description,
            status: TaskStatus::Pending,
            due_date,
            completed_at: None,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: Some(data.id),
            title: data.title,
            description: data.description,
            status: data.status,
            due_date: data.due_date,
            completed_at: data.completed_at,
            created_at: data.created_at,
        }
    }

    /// Returns the store-assigned identifier, if the task has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marks the task as completed and stamps the completion time.
    ///
    /// This transition is unconditional and overwrites any prior completion
    /// timestamp; the idempotence of repeated completion is enforced by the
    /// service layer, which checks the current status before invoking it.
    pub fn mark_completed(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Completed;
        self.completed_at = Some(clock.utc());
    }
}
