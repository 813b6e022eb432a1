//! To-do records as they travel over HTTP.
//!
//! The server serializes these, the client deserializes them. Field names
//! are camelCase on the wire (`createdAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Update body that flips this record's completion flag.
    pub fn toggled(&self) -> TodoUpdate {
        TodoUpdate {
            completed: !self.completed,
        }
    }
}

/// Body of `POST /api/todos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
}

/// Body of `PUT /api/todos/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoUpdate {
    pub completed: bool,
}

/// JSON body of every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}
