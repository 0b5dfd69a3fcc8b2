//! # Inventory File Store
//!
//! Load and save of the whole inventory file.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventory File Lifecycle                           │
//! │                                                                         │
//! │  StoreConfig::new(path) ← Choose the file                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryStore::new(config)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load() ──► missing file?  → create empty file, empty inventory        │
//! │       │     bad line?      → skip it, record a SkippedLine             │
//! │       │     other I/O?     → Err(StoreError), nothing loaded           │
//! │       ▼                                                                 │
//! │  (menu mutations happen in memory)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save() ──► write inventory.txt.tmp                                    │
//! │             fsync                                                       │
//! │             rename over inventory.txt                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomicity
//! A failed save leaves the previous file untouched: the records are
//! written to a sibling temp file that only replaces the real one once it
//! is complete.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use stockroom_core::Inventory;
use tracing::{debug, info, warn};

use crate::error::{SkipReason, StoreError, StoreResult};
use crate::record::{parse_record, split_line, DELIMITER};

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use stockroom_store::StoreConfig;
///
/// let config = StoreConfig::new("inventory.txt");
/// assert!(config.create_if_missing);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the inventory file.
    pub path: PathBuf,

    /// Create an empty file when loading a path that does not exist.
    /// Default: true
    pub create_if_missing: bool,
}

impl StoreConfig {
    /// Creates a configuration for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            path: path.into(),
            create_if_missing: true,
        }
    }
}

// =============================================================================
// Load Report
// =============================================================================

/// A line of the file that was not loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: u64,
    /// The line as read, without its line ending.
    pub content: String,
    pub reason: SkipReason,
}

/// Everything `load` produced.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Products that loaded, in file order.
    pub inventory: Inventory,
    /// Lines that were skipped, in file order.
    pub skipped: Vec<SkippedLine>,
    /// True when the file did not exist and was created empty.
    pub created: bool,
}

// =============================================================================
// Store
// =============================================================================

/// Handle to the inventory file.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    config: StoreConfig,
}

impl InventoryStore {
    /// Creates a store. No file is touched until `load` or `save`.
    pub fn new(config: StoreConfig) -> Self {
        InventoryStore { config }
    }

    /// Path of the inventory file.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Reads the whole file into an inventory.
    ///
    /// ## Returns
    /// * `Ok(LoadReport)` - Loaded products plus skipped-line diagnostics
    /// * `Err(StoreError::Io)` - The file exists but could not be read
    pub fn load(&self) -> StoreResult<LoadReport> {
        let path = self.path();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if !self.config.create_if_missing {
                    debug!(?path, "Inventory file not found");
                    return Ok(LoadReport::default());
                }
                info!(?path, "Inventory file not found, creating an empty one");
                self.create_empty()?;
                return Ok(LoadReport {
                    created: true,
                    ..LoadReport::default()
                });
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let report = read_report(BufReader::new(file)).map_err(|e| StoreError::io(path, e))?;

        info!(
            ?path,
            loaded = report.inventory.len(),
            skipped = report.skipped.len(),
            "Inventory loaded"
        );
        Ok(report)
    }

    /// Replaces the file with the given inventory.
    ///
    /// ## Returns
    /// * `Ok(count)` - Number of products written
    /// * `Err(StoreError)` - Nothing was replaced
    pub fn save(&self, inventory: &Inventory) -> StoreResult<usize> {
        let path = self.path();
        let temp_path = temp_path(path);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        if let Err(e) = write_records(&temp_path, inventory) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::io(path, e)
        })?;

        info!(?path, count = inventory.len(), "Inventory saved");
        Ok(inventory.len())
    }

    fn create_empty(&self) -> StoreResult<()> {
        let path = self.path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        File::create(path).map_err(|e| StoreError::io(path, e))?;
        Ok(())
    }
}

/// Parses the file line by line, skipping bad lines.
///
/// Only a failure of the underlying reader is an error.
fn read_report<R: BufRead>(reader: R) -> io::Result<LoadReport> {
    let mut report = LoadReport::default();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let line = index as u64 + 1;
        let mut bytes = bytes?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                let content = String::from_utf8_lossy(e.as_bytes()).into_owned();
                warn!(line, "Skipping inventory line that is not valid UTF-8");
                report.skipped.push(SkippedLine {
                    line,
                    content,
                    reason: SkipReason::Encoding,
                });
                continue;
            }
        };

        if text.trim().is_empty() {
            continue;
        }

        let outcome = parse_record(&split_line(&text))
            .and_then(|product| report.inventory.add(product).map_err(SkipReason::from));

        if let Err(reason) = outcome {
            warn!(line, content = %text, reason = %reason, "Skipping malformed inventory line");
            report.skipped.push(SkippedLine {
                line,
                content: text,
                reason,
            });
        }
    }

    Ok(report)
}

/// Writes every product to `path`, flushed and synced.
fn write_records(path: &Path, inventory: &Inventory) -> StoreResult<()> {
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(BufWriter::new(file));

    for product in inventory.list_all() {
        writer.serialize(product)?;
    }

    let buffered = writer
        .into_inner()
        .map_err(|e| StoreError::io(path, e.into_error()))?;
    let file = buffered
        .into_inner()
        .map_err(|e| StoreError::io(path, e.into_error()))?;
    file.sync_all().map_err(|e| StoreError::io(path, e))?;

    debug!(?path, count = inventory.len(), "Records written");
    Ok(())
}

/// `inventory.txt` → `inventory.txt.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// =============================================================================
// Unit Tests
// =============================================================================
