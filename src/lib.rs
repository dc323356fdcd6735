//! Taskboard: layered task-management backend core.
//!
//! This crate provides the storage-facing core of a task manager: a task
//! domain model, a repository abstraction with relational and in-memory
//! adapters, and a service layer enforcing the completion rule and building
//! the tabular export.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! The transport layer (HTTP routing and serialization) lives outside this
//! crate; it constructs the repository and service once at startup from
//! [`config::DatabaseConfig`] and passes them into request handlers.

pub mod config;
pub mod task;
