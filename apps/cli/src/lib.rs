//! # Stockroom Console Application
//!
//! The `stockroom` binary: a numbered menu over an inventory file.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Console                                │
//! │                                                                         │
//! │  main.rs ────► Cli::parse() ──► run(cli)                               │
//! │                                                                         │
//! │  lib.rs ─────► tracing, config, console wiring                         │
//! │                                                                         │
//! │  menu.rs ────► loop: show menu, dispatch, pause, save on exit          │
//! │                                                                         │
//! │  commands/ ──► add, remove, search, update, list                       │
//! │                                                                         │
//! │  console.rs ─► prompts, re-prompts, rules, screen clearing             │
//! │                                                                         │
//! │  state/ ─────► StockroomConfig, Session                                │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  stockroom-core (Inventory, Product)                             │  │
//! │  │  stockroom-store (inventory.txt)                                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Load configuration (defaults, TOML file, environment, `--file`)
//! 3. Lock stdin/stdout into a [`Console`]
//! 4. Open the inventory file, reporting skipped lines
//! 5. Run the menu until exit, then save

pub mod cli;
pub mod commands;
pub mod console;
pub mod error;
pub mod menu;
pub mod state;

use std::io;

use stockroom_store::{InventoryStore, StoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use cli::Cli;
pub use console::Console;
pub use error::{CliError, CliResult};
pub use state::{Session, StockroomConfig};

/// Runs the console application.
pub fn run(cli: Cli) -> CliResult<()> {
    init_tracing(cli.verbose);

    info!("Starting Stockroom");

    let mut config = StockroomConfig::load(cli.config.as_deref())?;
    if let Some(file) = cli.file {
        config.storage.file = file;
        config.validate()?;
    }

    let store = InventoryStore::new(StoreConfig::new(&config.storage.file));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config.display.clone());
    console.clear()?;

    menu::run_session(store, &mut console)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_store=debug` - Debug the file layer only
/// - Default: warnings only, or debug with `--verbose`
///
/// Logs are written to stderr so they stay out of the menu.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
