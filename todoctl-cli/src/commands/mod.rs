//! Command implementations for todoctl CLI

pub mod serve;
pub mod ui;

// Re-export main dispatcher functions for flat access from main.rs
pub use serve::run_serve;
pub use ui::run_ui;
