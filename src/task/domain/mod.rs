//! Domain model for task management.
//!
//! The task domain models the task record, its single status transition,
//! and the listing filter criteria, while keeping all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod filter;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use filter::TaskFilter;
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskStatus};
