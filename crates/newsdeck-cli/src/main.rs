use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsdeck_core::DeckConfig;

mod commands;

#[derive(Parser)]
#[command(name = "newsdeck")]
#[command(author, version, about = "A terminal news pager with flickable tile pages")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// JSON tile list or RSS/Atom file (defaults to general.source)
        #[arg(short = 's', long)]
        source: Option<PathBuf>,
        /// Page to open on
        #[arg(short = 'p', long, default_value_t = 0)]
        page: usize,
    },
    /// Print how tiles are packed into pages
    Layout {
        #[arg(short = 's', long)]
        source: PathBuf,
        /// Viewport width in canvas units
        #[arg(long, default_value_t = 80)]
        width: u32,
        /// Viewport height in canvas units
        #[arg(long, default_value_t = 40)]
        height: u32,
    },
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(DeckConfig::load()?);

    let interactive = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, interactive)?;

    // Handle commands
    match cli.command {
        Some(Commands::Run { source, page }) => commands::run::run(config, source, page),
        None => commands::run::run(config, None, 0),
        Some(Commands::Layout {
            source,
            width,
            height,
        }) => commands::layout::run(&config, &source, width, height),
        Some(Commands::InitConfig { force }) => commands::init_config::run(force),
    }
}

/// Install the tracing subscriber. The TUI owns the terminal, so the
/// interactive command logs to a file in the data directory instead.
fn init_logging(config: &DeckConfig, interactive: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if interactive {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

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
