//! Configuration paths and `.env` loading
//!
//! Settings themselves are clap arguments with `env` fallbacks; this module
//! only makes `.env` files visible to them and locates the data directory.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Load environment variables from .env files
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.todoctl/.env
///
/// Returns the files that were loaded. Runs before tracing is set up, so the
/// caller does the logging.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        // dotenvy doesn't overwrite existing vars, so this is safe
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded_from.push(env_file);
        }
    }

    loaded_from
}

/// Get the todoctl config directory path (~/.todoctl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".todoctl"))
}

/// Default SQLite database file (~/.todoctl/todos.db)
pub fn default_database_path() -> Result<PathBuf> {
    config_dir()
        .map(|dir| dir.join("todos.db"))
        .context("Could not determine home directory; pass --database-url")
}
