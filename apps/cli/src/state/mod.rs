//! # State Module
//!
//! Everything the console app holds between keystrokes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────────┐      │
//! │  │   StockroomConfig    │        │           Session            │      │
//! │  │                      │        │                              │      │
//! │  │  storage.file        │──────► │  Inventory (in memory)       │      │
//! │  │  display.*           │        │  InventoryStore (file)       │      │
//! │  │                      │        │  running flag                │      │
//! │  └──────────────────────┘        └──────────────────────────────┘      │
//! │                                                                         │
//! │  • StockroomConfig: read-only after startup                            │
//! │  • Session: owned by the menu driver, passed by &mut to each action    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{
    ConfigError, ConfigResult, DisplaySettings, StockroomConfig, StorageSettings, MIN_RULE_WIDTH,
};
pub use session::Session;
