//! Task management for Taskboard.
//!
//! Tasks are created pending, optionally completed exactly once, and
//! deleted explicitly; the collection can be listed with conjunctive
//! filters and exported as a spreadsheet. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
mod tests;
