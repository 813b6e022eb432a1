//! HTTP server command
//!
//! Opens the database and runs the todo API until Ctrl+C / SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::db::{create_memory_pool, create_pool, open_file};
use todoctl_server::http::{run_server, ServerConfig};

use crate::config;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "TODOCTL_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Database URL, e.g. sqlite://todos.db (default: ~/.todoctl/todos.db)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Keep todos in memory only; they are lost on exit
    #[arg(long)]
    pub in_memory: bool,

    /// Origin allowed to call the API cross-origin (repeatable or comma separated; default: any)
    #[arg(long = "cors-origin", env = "TODOCTL_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool = if args.in_memory {
        tracing::warn!("Using an in-memory database; todos are lost on exit");
        create_memory_pool().await
    } else if let Some(url) = &args.database_url {
        tracing::info!("Opening database {}", url);
        create_pool(url).await
    } else {
        let path = config::default_database_path()?;
        tracing::info!("Opening database at {}", path.display());
        open_file(&path).await
    }
    .context("Failed to open database")?;

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        cors_origins: args.cors_origins,
        request_timeout: Duration::from_secs(args.timeout),
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
