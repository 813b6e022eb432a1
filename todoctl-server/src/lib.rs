//! todoctl-server: to-do list REST API
//!
//! SQLite storage behind a small repository, validated request models,
//! and an axum router exposing list/create/toggle/delete under `/api`.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_memory_pool, create_pool, open_file, DbError, TodoRecord, TodoRepo};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
