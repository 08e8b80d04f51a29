//! Transfer API - layered money-transfer backend
//!
//! A PostgreSQL-backed HTTP API. Accounts hold balances in minor
//! units; transfers move funds between two accounts atomically; a
//! small task tracker rides along on the same stack.
//!
//! # Modules
//!
//! - [`domain`] - Entities, value objects and repository traits
//! - [`account`] - Account opening, listing and balance queries
//! - [`transfer`] - Atomic fund movement between accounts
//! - [`task`] - Task tracking
//! - [`gateway`] - HTTP surface (handlers, router, OpenAPI)
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing setup
//! - [`db`] - PostgreSQL connection pool

pub mod config;
pub mod db;
pub mod domain;
pub mod logging;

// Bounded contexts
pub mod account;
pub mod task;
pub mod transfer;

// HTTP surface
pub mod gateway;

// Convenient re-exports at crate root
pub use db::Database;
pub use domain::{Account, AccountId, Money, Task, TaskId, Transfer, TransferId};
