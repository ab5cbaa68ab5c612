use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use showcase_core::{AppConfig, PageSet, Roster};

mod commands;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(author, version, about = "A full-screen paged character showcase")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ~/.config/showcase/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// List the configured pages
    Pages,
    /// Print the character roster
    Roster,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration to disk
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = Arc::new(
        loaded.with_context(|| format!("Failed to load {}", config_path.display()))?,
    );

    let tui = matches!(cli.command, None | Some(Commands::Run));
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run) | None => {
            let roster = load_roster(&config)?;
            let pages = PageSet::new(config.ui.pages.clone())?;
            commands::run::run(config, roster, pages)
        }
        Some(Commands::Pages) => commands::pages::run(&config),
        Some(Commands::Roster) => commands::roster::run(&load_roster(&config)?),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}

/// The TUI owns the terminal, so it logs to a file in the data directory;
/// everything else logs to stderr.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.general.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
    } else {
        None
    };
    let stderr_layer = (!to_file).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

fn load_roster(config: &AppConfig) -> Result<Roster> {
    match config.roster_path() {
        Some(path) => Roster::load(&path)
            .with_context(|| format!("Failed to load roster {}", path.display())),
        None => Ok(Roster::default()),
    }
}
