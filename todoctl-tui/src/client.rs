//! HTTP client for the todo API
//!
//! One method per endpoint. Non-success responses become
//! `ClientError::Api` carrying the server's `error` message.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use todoctl_core::{ErrorBody, NewTodo, Todo, TodoUpdate};

/// API base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Errors returned by `ApiClient`.
///
/// `Display` is the text the view shows to the user.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never got a response (connection refused, DNS, ...).
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// A success response whose body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    /// HTTP status of an API error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client for the `/api/todos` endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for an API base URL such as `http://localhost:3001/api`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = Client::builder().build().map_err(ClientError::Transport)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: i64) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    /// GET /todos
    pub async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self
            .http
            .get(self.todos_url())
            .send()
            .await
            .map_err(ClientError::Transport)?;

        parse_json(response).await
    }

    /// POST /todos
    ///
    /// The title is sent as typed; the server trims it.
    pub async fn create(&self, title: &str) -> Result<Todo, ClientError> {
        let body = NewTodo {
            title: title.to_string(),
        };

        let response = self
            .http
            .post(self.todos_url())
            .json(&body)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        parse_json(response).await
    }

    /// PUT /todos/{id}
    pub async fn set_completed(&self, id: i64, completed: bool) -> Result<Todo, ClientError> {
        let response = self
            .http
            .put(self.todo_url(id))
            .json(&TodoUpdate { completed })
            .send()
            .await
            .map_err(ClientError::Transport)?;

        parse_json(response).await
    }

    /// DELETE /todos/{id}
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.todo_url(id))
            .send()
            .await
            .map_err(ClientError::Transport)?;

        check_status(response).await?;
        Ok(())
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(ClientError::Decode)
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(status.as_u16(), &text),
    })
}

/// The body's `error` field when present and non-empty, else a status line.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_body_field() {
        let body = r#"{"error":"todo '3' not found","status":404}"#;
        assert_eq!(error_message(404, body), "todo '3' not found");
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(error_message(502, ""), "HTTP error! status: 502");
        assert_eq!(error_message(500, "<html>oops</html>"), "HTTP error! status: 500");
        assert_eq!(error_message(400, r#"{"error":""}"#), "HTTP error! status: 400");
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = ApiClient::new("http://localhost:3001/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3001/api");
        assert_eq!(client.todo_url(7), "http://localhost:3001/api/todos/7");
    }

    #[test]
    fn api_error_displays_server_message() {
        let err = ClientError::Api {
            status: 400,
            message: "title is required and must be a non-empty string".into(),
        };
        assert_eq!(err.to_string(), "title is required and must be a non-empty string");
        assert_eq!(err.status(), Some(400));
    }
}
