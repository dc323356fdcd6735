//! Diesel row models for task persistence.

use super::schema::tasks;
use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Lifecycle status string.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records; the store assigns the identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Lifecycle status string.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewTaskRow {
    /// Builds an insert row from a not-yet-persisted task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            status: task.status().as_str().to_owned(),
            due_date: task.due_date(),
            completed_at: task.completed_at(),
            created_at: task.created_at(),
        }
    }
}

/// Update model covering every mutable column.
///
/// `treat_none_as_null` makes the edit a full replace: absent optional
/// values clear the corresponding columns rather than being skipped.
/// `created_at` is deliberately not part of this set.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: String,
    /// Replacement description, cleared when `None`.
    pub description: Option<String>,
    /// Replacement status string.
    pub status: String,
    /// Replacement due date, cleared when `None`.
    pub due_date: Option<DateTime<Utc>>,
    /// Replacement completion timestamp, cleared when `None`.
    pub completed_at: Option<DateTime<Utc>>,
}

impl TaskChangeset {
    /// Builds a changeset from a task's current mutable fields.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            status: task.status().as_str().to_owned(),
            due_date: task.due_date(),
            completed_at: task.completed_at(),
        }
    }
}
