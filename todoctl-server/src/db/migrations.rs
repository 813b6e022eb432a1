//! Schema for the todos table

use sqlx::SqlitePool;

/// Create the todos table and its listing index if they are missing.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::debug!("Running todo migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL CHECK (length(trim(title)) > 0),
            completed BOOLEAN NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_todos_created_at
        ON todos (created_at DESC)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("Todo migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn migrations_are_idempotent() {
        // create_memory_pool already ran them once
        let pool = create_memory_pool().await.unwrap();
        run(&pool).await.unwrap();
        run(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn blank_title_violates_check_constraint() {
        let pool = create_memory_pool().await.unwrap();

        let result = sqlx::query("INSERT INTO todos (title, created_at) VALUES ('   ', '2026-01-01T00:00:00Z')")
            .execute(&pool)
            .await;

        assert!(result.is_err());
    }
}
