//! Todo repository
//!
//! - list: newest first, `id` breaks ties inside one clock tick
//! - set_completed / delete: a missing id is `DbError::NotFound`

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use todoctl_core::Todo;

use crate::models::TodoTitle;

/// Todo record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TodoRecord {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<TodoRecord> for Todo {
    fn from(r: TodoRecord) -> Self {
        Self {
            id: r.id,
            title: r.title,
            completed: r.completed,
            created_at: r.created_at,
        }
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    fn todo_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "todo",
            id: id.to_string(),
        }
    }
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every todo, most recently created first.
    pub async fn list(&self) -> Result<Vec<TodoRecord>, DbError> {
        let todos = sqlx::query_as::<_, TodoRecord>(
            r#"
            SELECT id, title, completed, created_at
            FROM todos
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(todos)
    }

    /// Insert a new, not yet completed todo and return the stored row.
    pub async fn create(&self, title: TodoTitle) -> Result<TodoRecord, DbError> {
        let todo = sqlx::query_as::<_, TodoRecord>(
            r#"
            INSERT INTO todos (title, completed, created_at)
            VALUES (?, FALSE, ?)
            RETURNING id, title, completed, created_at
            "#,
        )
        .bind(title.as_str())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(todo)
    }

    /// Overwrite the completion flag of one todo.
    pub async fn set_completed(&self, id: i64, completed: bool) -> Result<TodoRecord, DbError> {
        sqlx::query_as::<_, TodoRecord>(
            r#"
            UPDATE todos
            SET completed = ?
            WHERE id = ?
            RETURNING id, title, completed, created_at
            "#,
        )
        .bind(completed)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::todo_not_found(id))
    }

    /// Delete one todo.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::todo_not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    fn title(s: &str) -> TodoTitle {
        TodoTitle::new(s).unwrap()
    }

    #[tokio::test]
    async fn create_stores_trimmed_incomplete_todo() {
        let pool = create_memory_pool().await.unwrap();
        let repo = TodoRepo::new(&pool);

        let todo = repo.create(title("  Buy milk  ")).await.unwrap();

        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(repo.list().await.unwrap(), vec![todo]);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let pool = create_memory_pool().await.unwrap();
        let repo = TodoRepo::new(&pool);

        let first = repo.create(title("first")).await.unwrap();
        let second = repo.create(title("second")).await.unwrap();
        let third = repo.create(title("third")).await.unwrap();

        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[tokio::test]
    async fn set_completed_touches_only_that_row() {
        let pool = create_memory_pool().await.unwrap();
        let repo = TodoRepo::new(&pool);

        let a = repo.create(title("a")).await.unwrap();
        let b = repo.create(title("b")).await.unwrap();

        let updated = repo.set_completed(a.id, true).await.unwrap();
        assert!(updated.completed);
        assert_eq!(updated.title, a.title);
        assert_eq!(updated.created_at, a.created_at);

        let stored = repo.list().await.unwrap();
        assert_eq!(stored.iter().find(|t| t.id == b.id), Some(&b));
    }

    #[tokio::test]
    async fn set_completed_missing_id_is_not_found() {
        let pool = create_memory_pool().await.unwrap();
        let repo = TodoRepo::new(&pool);

        let err = repo.set_completed(42, true).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "todo", ref id } if id == "42"));
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let pool = create_memory_pool().await.unwrap();
        let repo = TodoRepo::new(&pool);

        let todo = repo.create(title("short lived")).await.unwrap();
        repo.delete(todo.id).await.unwrap();

        assert!(repo.list().await.unwrap().is_empty());
        assert!(matches!(
            repo.delete(todo.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let pool = create_memory_pool().await.unwrap();
        let repo = TodoRepo::new(&pool);

        let first = repo.create(title("one")).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.create(title("two")).await.unwrap();

        assert!(second.id > first.id);
    }
}
