//! dashgrid - CLI entry point
//!
//! This binary exposes the layout engine for one-shot use and manages the
//! configuration file. Reading the live widget set, debouncing, and
//! persistence are library concerns; the CLI only drives them.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use dashgrid::config::default::init_config_file;
use dashgrid::config::loader::ConfigLoader;
use dashgrid::config::schema::Config;
use dashgrid::config::xdg;
use dashgrid::layout::{resolve_overlaps, WidgetGeometry, WidgetPlacement};
use dashgrid::{logging, Rect, WidgetId};

/// Dashboard grid layout engine
#[derive(Parser)]
#[command(name = "dgd")]
#[command(version, about = "Dashboard grid layout engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the dgd CLI
#[derive(Subcommand)]
enum Commands {
    /// Run one layout pass over a widget list (JSON) and print the result
    Resolve {
        /// Input file with a JSON array of {Id, X, Y, Width, Height}
        /// records; reads stdin when omitted
        file: Option<PathBuf>,

        /// Grid column count (overrides the configured value)
        #[arg(long)]
        columns: Option<u32>,

        /// Configuration file path (defaults to the XDG location)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate {
        /// Configuration file path (defaults to the XDG location)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            file,
            columns,
            config,
        } => {
            let loaded = match load_config(config.as_deref()) {
                Ok(c) => c,
                Err(message) => {
                    eprintln!("{message}");
                    return ExitCode::FAILURE;
                }
            };
            logging::init(loaded.log.level);
            let columns = columns.unwrap_or(loaded.grid.columns);
            match run_resolve(file.as_deref(), columns) {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(message) => {
                    eprintln!("{message}");
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Config { action } => run_config(action),
    }
}

/// Loads the configuration from an explicit path or the default location.
fn load_config(path: Option<&std::path::Path>) -> Result<Config, String> {
    match path {
        Some(path) => ConfigLoader::load_from_path(path).map_err(|e| e.to_string()),
        None => ConfigLoader::load_default().map_err(|e| e.to_string()),
    }
}

/// Reads a placement list, runs one pass, and serializes the result.
fn run_resolve(file: Option<&std::path::Path>, columns: u32) -> Result<String, String> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            buf
        }
    };

    let placements: Vec<WidgetPlacement> =
        serde_json::from_str(&input).map_err(|e| format!("Invalid widget list: {}", e))?;

    let mut items: Vec<WidgetGeometry> = placements
        .iter()
        .map(|p| WidgetGeometry::new(WidgetId(p.id), Rect::new(p.x, p.y, p.width, p.height)))
        .collect();
    resolve_overlaps(&mut items, columns);

    let resolved = dashgrid::layout::snapshot::placements(&items);
    serde_json::to_string_pretty(&resolved).map_err(|e| format!("Serialization failed: {}", e))
}

/// Handles the `config` subcommand.
fn run_config(action: ConfigAction) -> ExitCode {
    match action {
        ConfigAction::Init { force } => match init_config_file(force) {
            Ok(path) => {
                println!("Created {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
            ExitCode::SUCCESS
        }
        ConfigAction::Validate { config } => match load_config(config.as_deref()) {
            Ok(_) => {
                println!("Configuration is valid");
                ExitCode::SUCCESS
            }
            Err(message) => {
                eprintln!("{message}");
                ExitCode::FAILURE
            }
        },
    }
}
