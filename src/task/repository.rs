//! PostgreSQL persistence for tasks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::{StorageError, Task, TaskId, TaskRepository};

/// Task store backed by the `tasks` table. Ids come from the table's
/// serial column.
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn task_from_row(row: &PgRow) -> Result<Task, sqlx::Error> {
    Ok(Task {
        id: TaskId::new(row.try_get::<i64, _>("id")?),
        title: row.try_get("title")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, title: &str, created_at: DateTime<Utc>) -> Result<Task, StorageError> {
        let row = sqlx::query(
            r#"INSERT INTO tasks (title, created_at, updated_at)
               VALUES ($1, $2, $2)
               RETURNING id, title, created_at, updated_at"#,
        )
        .bind(title)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        task_from_row(&row).map_err(StorageError::from)
    }

    async fn update(
        &self,
        id: TaskId,
        title: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Task>, StorageError> {
        let row = sqlx::query(
            r#"UPDATE tasks SET title = $2, updated_at = $3
               WHERE id = $1
               RETURNING id, title, created_at, updated_at"#,
        )
        .bind(id.inner())
        .bind(title)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(task_from_row).transpose().map_err(StorageError::from)
    }

    async fn find_all(&self) -> Result<Vec<Task>, StorageError> {
        let rows = sqlx::query(
            r#"SELECT id, title, created_at, updated_at FROM tasks ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(task_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(StorageError::from)
    }
}
