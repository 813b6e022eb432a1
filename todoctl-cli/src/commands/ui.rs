//! Terminal client command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_tui::{ApiClient, DEFAULT_API_URL};

/// Arguments for the ui command
#[derive(Parser, Debug)]
pub struct UiArgs {
    /// API base URL of a running `todoctl serve`
    #[arg(long, env = "TODOCTL_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Append logs to this file (the UI owns the terminal, so logging is off otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Run the terminal UI
pub async fn run_ui(args: UiArgs) -> Result<()> {
    let client = ApiClient::new(&args.api_url).context("Failed to create HTTP client")?;
    todoctl_tui::run(client).await
}
