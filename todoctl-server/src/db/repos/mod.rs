//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Writes use RETURNING so the handler gets the stored row in one query
//! - Missing rows surface as `DbError::NotFound`, never as an empty success

pub mod todos;

pub use todos::{DbError, TodoRecord, TodoRepo};
