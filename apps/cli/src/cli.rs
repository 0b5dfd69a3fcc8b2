//! Command line flags.

use std::path::PathBuf;

use clap::Parser;

/// Console inventory manager.
///
/// Products are kept in a plain text file, one `name,category,price,quantity`
/// line each, and edited through a numbered menu.
#[derive(Debug, Parser)]
#[command(name = "stockroom")]
#[command(about = "Manage a product inventory from the console")]
#[command(version)]
pub struct Cli {
    /// Inventory file to load and save (overrides the config file)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// TOML config file to read instead of the default location
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
