//! Todo endpoints, nested under `/api`

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::Value as JsonValue;
use todoctl_core::Todo;

use crate::db::TodoRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{TodoIdPath, ValidJson};
use crate::http::server::AppState;
use crate::models::{completed_flag, TodoTitle};

static MISSING: JsonValue = JsonValue::Null;

/// Named field of a request body.
///
/// Bodies that are not JSON objects (arrays, strings, ...) have no fields,
/// so every lookup on them reads as missing.
fn body_field<'a>(body: &'a JsonValue, name: &str) -> &'a JsonValue {
    body.get(name).unwrap_or(&MISSING)
}

/// GET /todos - every todo, newest first
async fn list_todos(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = TodoRepo::new(&state.pool).list().await?;
    Ok(Json(todos.into_iter().map(Todo::from).collect()))
}

/// POST /todos - create a todo
async fn create_todo(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<JsonValue>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let title = TodoTitle::from_json(body_field(&body, "title"))?;
    let todo = TodoRepo::new(&state.pool).create(title).await?;

    tracing::info!(id = todo.id, "Created todo");
    Ok((StatusCode::CREATED, Json(Todo::from(todo))))
}

/// PUT /todos/{id} - set the completed flag
async fn update_todo(
    State(state): State<Arc<AppState>>,
    TodoIdPath(id): TodoIdPath,
    ValidJson(body): ValidJson<JsonValue>,
) -> Result<Json<Todo>, ApiError> {
    let completed = completed_flag(body_field(&body, "completed"))?;
    let todo = TodoRepo::new(&state.pool)
        .set_completed(id, completed)
        .await?;

    tracing::debug!(id, completed, "Updated todo");
    Ok(Json(Todo::from(todo)))
}

/// DELETE /todos/{id} - delete a todo
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    TodoIdPath(id): TodoIdPath,
) -> Result<StatusCode, ApiError> {
    TodoRepo::new(&state.pool).delete(id).await?;

    tracing::info!(id, "Deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_field_reads_object_keys_only() {
        let body = json!({ "title": "Buy milk" });
        assert_eq!(body_field(&body, "title"), "Buy milk");
        assert!(body_field(&body, "completed").is_null());

        // Positional bodies carry no named fields
        assert!(body_field(&json!(["Buy milk"]), "title").is_null());
        assert!(body_field(&json!([true]), "completed").is_null());
        assert!(body_field(&json!("Buy milk"), "title").is_null());
    }
}
