//! Task tracking.

pub mod error;
pub mod handlers;
pub mod repository;
pub mod service;

pub use error::TaskError;
pub use repository::PgTaskRepository;
pub use service::{CreateTaskService, FindAllTasksService, UpdateTaskService};
