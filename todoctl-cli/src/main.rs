//! todoctl CLI - to-do list API server and terminal client
//!
//! - `serve`: run the REST API (`/api/todos`) over a SQLite database
//! - `ui`: terminal view of the list, talking to a running server
//! - `completions`: shell completion scripts

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::{LogOutput, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "todoctl",
    author,
    version,
    about = "Minimal to-do list: REST API server and terminal client"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Open the terminal to-do view against a running server
    Ui(commands::ui::UiArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so clap's env fallbacks see .env values
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    let output = match &cli.command {
        // The UI owns the terminal; log only to an explicit file
        Commands::Ui(args) => args
            .log_file
            .clone()
            .map_or(LogOutput::Off, LogOutput::File),
        _ => LogOutput::Stderr,
    };
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        output,
    })?;

    if env_files.is_empty() {
        tracing::debug!("No .env files found (current dir or ~/.todoctl)");
    } else {
        tracing::info!(files = ?env_files, "Loaded configuration from .env");
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Ui(args) => commands::run_ui(args).await?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
