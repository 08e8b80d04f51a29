//! Task use cases.

use std::time::Duration;

use chrono::Utc;

use super::error::TaskError;
use crate::domain::{Task, TaskId, TaskRepository};

/// Records a new task.
pub struct CreateTaskService<R> {
    tasks: R,
    timeout: Duration,
}

impl<R> CreateTaskService<R>
where
    R: TaskRepository,
{
    pub fn new(tasks: R, timeout: Duration) -> Self {
        Self { tasks, timeout }
    }

    pub async fn execute(&self, title: String) -> Result<Task, TaskError> {
        let task = tokio::time::timeout(self.timeout, self.tasks.create(&title, Utc::now()))
            .await
            .map_err(|_| TaskError::Timeout)??;
        Ok(task)
    }
}

/// Retitles an existing task.
pub struct UpdateTaskService<R> {
    tasks: R,
    timeout: Duration,
}

impl<R> UpdateTaskService<R>
where
    R: TaskRepository,
{
    pub fn new(tasks: R, timeout: Duration) -> Self {
        Self { tasks, timeout }
    }

    pub async fn execute(&self, id: TaskId, title: String) -> Result<Task, TaskError> {
        let task = tokio::time::timeout(self.timeout, self.tasks.update(id, &title, Utc::now()))
            .await
            .map_err(|_| TaskError::Timeout)??;
        task.ok_or(TaskError::NotFound)
    }
}

/// Lists every task in creation order.
pub struct FindAllTasksService<R> {
    tasks: R,
    timeout: Duration,
}

impl<R> FindAllTasksService<R>
where
    R: TaskRepository,
{
    pub fn new(tasks: R, timeout: Duration) -> Self {
        Self { tasks, timeout }
    }

    pub async fn execute(&self) -> Result<Vec<Task>, TaskError> {
        let tasks = tokio::time::timeout(self.timeout, self.tasks.find_all())
            .await
            .map_err(|_| TaskError::Timeout)??;
        Ok(tasks)
    }
}
