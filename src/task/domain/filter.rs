//! Conjunctive filter criteria for task listing.

use super::{Task, TaskStatus};
use chrono::{DateTime, Utc};

/// Filter criteria applied when listing tasks.
///
/// All supplied criteria combine conjunctively; the default value matches
/// every task. Date bounds are inclusive and apply to `created_at`; the
/// title criterion is a case-sensitive substring match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    from_date: Option<DateTime<Utc>>,
    to_date: Option<DateTime<Utc>>,
    status: Option<TaskStatus>,
    title_contains: Option<String>,
}

impl TaskFilter {
    /// Creates a filter matching every task.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            from_date: None,
            to_date: None,
            status: None,
            title_contains: None,
        }
    }

    /// Restricts results to tasks created at or after the given instant.
    #[must_use]
    pub const fn with_from_date(mut self, from_date: DateTime<Utc>) -> Self {
        self.from_date = Some(from_date);
        self
    }

    /// Restricts results to tasks created at or before the given instant.
    #[must_use]
    pub const fn with_to_date(mut self, to_date: DateTime<Utc>) -> Self {
        self.to_date = Some(to_date);
        self
    }

    /// Restricts results to tasks with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to tasks whose title contains the given substring.
    #[must_use]
    pub fn with_title_contains(mut self, needle: impl Into<String>) -> Self {
        self.title_contains = Some(needle.into());
        self
    }

    /// Returns the inclusive lower creation-date bound, if any.
    #[must_use]
    pub const fn from_date(&self) -> Option<DateTime<Utc>> {
        self.from_date
    }

    /// Returns the inclusive upper creation-date bound, if any.
    #[must_use]
    pub const fn to_date(&self) -> Option<DateTime<Utc>> {
        self.to_date
    }

    /// Returns the status criterion, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the title substring criterion, if any.
    #[must_use]
    pub fn title_contains(&self) -> Option<&str> {
        self.title_contains.as_deref()
    }

    /// Evaluates the filter against a task.
    ///
    /// This predicate is the authoritative filter semantics; the relational
    /// adapter translates the same criteria to SQL.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if self.from_date.is_some_and(|from| task.created_at() < from) {
            return false;
        }
        if self.to_date.is_some_and(|to| task.created_at() > to) {
            return false;
        }
        if self.status.is_some_and(|status| task.status() != status) {
            return false;
        }
        if self
            .title_contains
            .as_deref()
            .is_some_and(|needle| !task.title().contains(needle))
        {
            return false;
        }
        true
    }
}
