//! Application services for task orchestration.

pub mod export;
mod tasks;

pub use tasks::{CreateTaskRequest, TaskServiceError, TaskServiceResult, TasksService};
