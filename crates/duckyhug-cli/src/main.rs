use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duckyhug_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "duckyhug")]
#[command(author, version, about = "The DuckyHug book showcase in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ~/.config/duckyhug/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal showcase
    Run,
    /// Submit an address through the capture form
    Subscribe {
        /// Email address (not validated)
        email: String,
    },
    /// Print what auto-scroll does over a number of ticks
    Tour {
        /// Number of auto-scroll periods to simulate
        #[arg(short = 's', long, default_value_t = 7)]
        steps: usize,
        /// Number of items (defaults to the configured books)
        #[arg(short = 'i', long)]
        items: Option<usize>,
        /// Viewport width at load (defaults to the desktop threshold)
        #[arg(short = 'w', long)]
        width: Option<u32>,
    },
    /// Show the resolved configuration
    Config {
        /// Write the resolved configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let config = Arc::new(config);

    // The TUI owns the screen, so its logs go to a file
    let tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Subscribe { email }) => commands::subscribe::run(&config, &email),
        Some(Commands::Tour {
            steps,
            items,
            width,
        }) => commands::tour::run(&config, steps, items, width),
        Some(Commands::Config { write }) => {
            commands::config::run(&config, cli.config.as_deref(), write)
        }
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        std::fs::create_dir_all(config.data_dir())?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
