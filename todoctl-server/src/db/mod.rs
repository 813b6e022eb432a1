//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - Rely on DB constraints and RETURNING, no check-then-write
//! - Not-found is a distinct error so handlers can map it to 404

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options, open_file};
pub use repos::*;
