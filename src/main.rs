use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "sagx")]
#[command(about = "SAGX - a small voice assistant: spoken commands in, canned actions out")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.sagx/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print effects as JSON lines instead of speaking and opening URLs
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read transcripts from stdin, one per line, and answer each
    Listen,

    /// Answer a single transcript
    Ask {
        /// The transcript, e.g. `sagx ask open github`
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Show the routing rules in evaluation order
    Rules,

    /// Write a default ~/.sagx/config.toml (or the --config path)
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for assistant output
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Listen) | None => {
            cli::listen::listen_command(config_path, cli.dry_run).await?;
        }
        Some(Commands::Ask { words }) => {
            cli::ask::ask_command(config_path, &words.join(" "), cli.dry_run).await?;
        }
        Some(Commands::Rules) => {
            cli::rules::rules_command();
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path, force)?;
        }
    }

    Ok(())
}
