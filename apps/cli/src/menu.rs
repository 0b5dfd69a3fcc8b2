//! # Menu Loop
//!
//! Drives a [`Session`] from start to exit.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Menu Loop                                            │
//! │                                                                         │
//! │  run_session(store) ──► Session::open ──► report skipped lines         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌───────────────────────────────────────────────┐                     │
//! │  │ while session.is_running()                    │                     │
//! │  │   show menu, read "1".."6"                    │                     │
//! │  │   clear screen                                │                     │
//! │  │   dispatch ──► Ok / reported error            │                     │
//! │  │   pause                                       │                     │
//! │  └───────────────────────────────────────────────┘                     │
//! │         │  6, or input closed                                          │
//! │         ▼                                                               │
//! │  session.save() ──► "inventory file updated" or reported failure       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The inventory is saved on every way out of the loop, including a fatal
//! terminal error. A file that failed to load is reported and the menu runs
//! over an empty inventory, but that file is never overwritten.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use stockroom_store::InventoryStore;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::commands;
use crate::console::Console;
use crate::error::{CliError, CliResult};
use crate::state::Session;

// =============================================================================
// Menu Choice
// =============================================================================

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Search,
    Update,
    List,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::Search,
        MenuChoice::Update,
        MenuChoice::List,
        MenuChoice::Exit,
    ];

    /// Number typed to pick this entry.
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Remove => 2,
            MenuChoice::Search => 3,
            MenuChoice::Update => 4,
            MenuChoice::List => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add product",
            MenuChoice::Remove => "Remove product",
            MenuChoice::Search => "Search product",
            MenuChoice::Update => "Update product",
            MenuChoice::List => "Show inventory",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  | {}", self.number(), self.label())
    }
}

/// Why a menu answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuChoiceError {
    #[error("Invalid option, it must be a number.")]
    NotANumber,

    #[error("Invalid option, choose a number from 1 to 6.")]
    OutOfRange,
}

impl FromStr for MenuChoice {
    type Err = MenuChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(MenuChoiceError::NotANumber);
        }

        MenuChoice::ALL
            .into_iter()
            .find(|choice| s.parse::<u8>().ok() == Some(choice.number()))
            .ok_or(MenuChoiceError::OutOfRange)
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Opens the store's file and runs the menu until exit.
pub fn run_session<R: BufRead, W: Write>(
    store: InventoryStore,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    let (mut session, skipped) = match Session::open(store.clone()) {
        Ok(opened) => opened,
        Err(e) => {
            warn!(error = %e, "Inventory file could not be loaded");
            console.report(format_args!("Error loading the inventory file: {}", e))?;
            (Session::unreadable(store), Vec::new())
        }
    };

    for line in &skipped {
        console.warn(format_args!(
            "Line {} has an invalid format ({}): {}. It will be ignored.",
            line.line, line.reason, line.content
        ))?;
    }
    console.say(format_args!(
        "Inventory loaded from {} ({} products).",
        session.store().path().display(),
        session.inventory().len()
    ))?;

    run_menu(&mut session, console)
}

/// Runs the menu loop, then saves the inventory.
///
/// ## Returns
/// * `Ok(())` - The user exited or input ended; save failures are reported
///   on the console, not returned
/// * `Err(CliError)` - The terminal failed (after the save was attempted)
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    let outcome = menu_loop(session, console);
    if let Err(e) = &outcome {
        error!(error = %e, "Menu loop aborted");
    }

    if !session.is_writable() {
        console.warn(format_args!(
            "{} could not be read at startup and was not overwritten.",
            session.store().path().display()
        ))?;
        return outcome;
    }

    let saved = match session.save() {
        Ok(count) => console.say(format_args!(
            "The inventory file was updated ({} products).",
            count
        )),
        Err(e) => {
            warn!(error = %e, "Final save failed");
            console.report(format_args!("Error saving the inventory file: {}", e))
        }
    };

    outcome.and(saved)
}

fn menu_loop<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    while session.is_running() {
        show_menu(console)?;

        let answer = match console.prompt("Choose an option (1-6): ") {
            Err(CliError::InputClosed) => break,
            other => other?,
        };
        console.clear()?;

        let choice = match answer.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                console.warn(e)?;
                continue;
            }
        };
        debug!(?choice, "Menu choice");

        match dispatch(choice, session, console) {
            Ok(()) => {}
            Err(CliError::InputClosed) => break,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => console.report(e)?,
        }

        if choice != MenuChoice::Exit {
            match console.pause() {
                Err(CliError::InputClosed) => break,
                other => other?,
            }
        }
    }

    session.request_exit();
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    match choice {
        MenuChoice::Add => commands::add_product(session, console),
        MenuChoice::Remove => commands::remove_product(session, console),
        MenuChoice::Search => commands::search_products(session, console),
        MenuChoice::Update => commands::update_product(session, console),
        MenuChoice::List => commands::list_products(session, console),
        MenuChoice::Exit => {
            session.request_exit();
            Ok(())
        }
    }
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<()> {
    console.banner("Welcome to the Product Inventory")?;
    for choice in MenuChoice::ALL {
        console.say(choice)?;
    }
    console.rule()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DisplaySettings;
    use std::fs;
    use std::io::Cursor;
    use stockroom_store::StoreConfig;

    fn run_script(path: &std::path::Path, script: &str) -> String {
        let mut console = Console::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            DisplaySettings::plain(),
        );
        run_session(InventoryStore::new(StoreConfig::new(path)), &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Add));
        assert_eq!(" 6 ".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!("0".parse::<MenuChoice>(), Err(MenuChoiceError::OutOfRange));
        assert_eq!("7".parse::<MenuChoice>(), Err(MenuChoiceError::OutOfRange));
        assert_eq!(
            "999999".parse::<MenuChoice>(),
            Err(MenuChoiceError::OutOfRange)
        );
        assert_eq!("two".parse::<MenuChoice>(), Err(MenuChoiceError::NotANumber));
        assert_eq!("-1".parse::<MenuChoice>(), Err(MenuChoiceError::NotANumber));
        assert_eq!("".parse::<MenuChoice>(), Err(MenuChoiceError::NotANumber));
    }

    #[test]
    fn test_menu_choice_display() {
        assert_eq!(MenuChoice::Add.to_string(), "1  | Add product");
        assert_eq!(MenuChoice::Exit.to_string(), "6  | Exit");
    }

    #[test]
    fn test_add_list_and_save_on_exit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");

        let out = run_script(&path, "1\nBlue Ink\nOffice\n2.5\n3\n5\n6\n");

        assert!(out.contains("Product 'Blue Ink' was added"));
        assert!(out.contains("Product Inventory"));
        assert!(out.contains("The inventory file was updated (1 products)."));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Blue Ink,Office,2.5,3\n");
    }

    #[test]
    fn test_errors_are_reported_and_loop_continues() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");
        fs::write(&path, "Paper,Office,5.0,10\n").unwrap();

        let out = run_script(&path, "abc\n9\n2\nStapler\n1\npaper\n6\n");

        assert!(out.contains("| !! Invalid option, it must be a number."));
        assert!(out.contains("| !! Invalid option, choose a number from 1 to 6."));
        assert!(out.contains("|| Product 'Stapler' does not exist in the inventory"));
        assert!(out.contains("|| Product 'paper' already exists in the inventory"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Paper,Office,5.0,10\n"
        );
    }

    #[test]
    fn test_input_closed_still_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");

        // Input ends in the middle of adding a second product
        let out = run_script(&path, "1\nInk, Blue\nOffice\n2.5\n3\n1\nPaper\n");

        assert!(out.contains("The inventory file was updated (1 products)."));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\"Ink, Blue\",Office,2.5,3\n"
        );
    }

    #[test]
    fn test_skipped_lines_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");
        fs::write(&path, "Paper,Office,5.0,10\nbroken line\n").unwrap();

        let out = run_script(&path, "6\n");

        assert!(out.contains("| !! Line 2 has an invalid format"));
        assert!(out.contains("(1 products)"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Paper,Office,5.0,10\n"
        );
    }

    #[test]
    fn test_unreadable_file_is_reported_and_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");
        fs::create_dir(&path).unwrap();

        let out = run_script(&path, "1\nInk\nOffice\n1\n1\n6\n");

        assert!(out.contains("|| Error loading the inventory file"));
        assert!(out.contains("Product 'Ink' was added"));
        assert!(out.contains("was not overwritten"));
        assert!(path.is_dir());
    }

    #[test]
    fn test_remove_and_update_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");
        fs::write(&path, "Paper,Office,5.0,10\nBlue Ink,Office,2.5,3\n").unwrap();

        run_script(&path, "2\npaper\n4\nblue ink\n\n\n\n8\ny\n6\n");

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Blue Ink,Office,2.5,8\n"
        );
    }
}
