pub mod app;
pub mod client;
pub mod mode;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::App;
pub use client::{ApiClient, ClientError, DEFAULT_API_URL};
pub use mode::AppMode;
pub use terminal::run;
