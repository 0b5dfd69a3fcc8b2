//! # Console
//!
//! Line-oriented terminal I/O for the menu: prompts, re-prompts, rules,
//! pauses and screen clearing.
//!
//! The console is generic over its input and output so the whole menu can
//! be driven from in-memory buffers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Console Wiring                                       │
//! │                                                                         │
//! │  Production                          Tests                             │
//! │  ──────────                          ─────                             │
//! │  Console<StdinLock, Stdout>          Console<Cursor<&[u8]>, Vec<u8>>   │
//! │        │                                     │                          │
//! │        ▼                                     ▼                          │
//! │  crossterm Clear + MoveTo           clear_screen = false (no escapes)  │
//! │  wait for Enter                     pause_after_action = false         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every read that hits end-of-input returns [`CliError::InputClosed`].

use std::fmt::Display;
use std::io::{BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use stockroom_core::validation::{parse_price, parse_quantity, ValidationResult};

use crate::error::{CliError, CliResult};
use crate::state::DisplaySettings;

/// Prefix for warnings and rejected input.
pub const WARN_PREFIX: &str = "| !!";

/// Prefix for action results.
pub const RESULT_PREFIX: &str = "||";

/// Prompting terminal.
pub struct Console<R, W> {
    input: R,
    output: W,
    settings: DisplaySettings,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, settings: DisplaySettings) -> Self {
        Console {
            input,
            output,
            settings,
        }
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Writes one line.
    pub fn say(&mut self, text: impl Display) -> CliResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes a `| !!` warning line.
    pub fn warn(&mut self, text: impl Display) -> CliResult<()> {
        self.say(format_args!("{} {}", WARN_PREFIX, text))
    }

    /// Writes a `||` result line.
    pub fn report(&mut self, text: impl Display) -> CliResult<()> {
        self.say(format_args!("{} {}", RESULT_PREFIX, text))
    }

    /// Full-width `=====` rule.
    pub fn rule(&mut self) -> CliResult<()> {
        let line = "=".repeat(self.settings.rule_width);
        self.say(line)
    }

    /// Full-width `-----` rule.
    pub fn thin_rule(&mut self) -> CliResult<()> {
        let line = "-".repeat(self.settings.rule_width);
        self.say(line)
    }

    /// Screen title between two rules.
    pub fn banner(&mut self, title: &str) -> CliResult<()> {
        self.say("")?;
        self.rule()?;
        self.say(format_args!("                {}", title))?;
        self.rule()
    }

    /// Clears the terminal when enabled.
    pub fn clear(&mut self) -> CliResult<()> {
        if self.settings.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Waits for Enter, then clears the screen.
    pub fn pause(&mut self) -> CliResult<()> {
        if self.settings.pause_after_action {
            self.say("")?;
            self.prompt("Press Enter to return to the menu...")?;
        }
        self.clear()
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Shows `message` and reads one line, trimmed.
    pub fn prompt(&mut self, message: &str) -> CliResult<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Re-prompts until the answer is not blank.
    pub fn prompt_non_empty(&mut self, message: &str) -> CliResult<String> {
        loop {
            let answer = self.prompt(message)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.warn("Input cannot be empty.")?;
        }
    }

    /// Prompt for a replacement value; blank keeps `current`.
    ///
    /// Returns `None` when the user left the field blank.
    pub fn prompt_replacement(
        &mut self,
        label: &str,
        current: impl Display,
    ) -> CliResult<Option<String>> {
        let answer = self.prompt(&format!("{} (current: {}): ", label, current))?;
        Ok(Some(answer).filter(|a| !a.is_empty()))
    }

    /// Re-prompts until a valid price is entered.
    pub fn prompt_price(&mut self, message: &str) -> CliResult<f64> {
        self.prompt_parsed(message, false, parse_price)
            .map(|price| price.unwrap_or_default())
    }

    /// Like [`prompt_price`](Self::prompt_price), but blank returns `None`.
    pub fn prompt_optional_price(&mut self, message: &str) -> CliResult<Option<f64>> {
        self.prompt_parsed(message, true, parse_price)
    }

    /// Re-prompts until a valid quantity is entered.
    pub fn prompt_quantity(&mut self, message: &str) -> CliResult<i64> {
        self.prompt_parsed(message, false, parse_quantity)
            .map(|quantity| quantity.unwrap_or_default())
    }

    /// Like [`prompt_quantity`](Self::prompt_quantity), but blank returns `None`.
    pub fn prompt_optional_quantity(&mut self, message: &str) -> CliResult<Option<i64>> {
        self.prompt_parsed(message, true, parse_quantity)
    }

    /// Yes/no question. Only `y` or `yes` (any case) count as yes.
    pub fn confirm(&mut self, question: &str) -> CliResult<bool> {
        let answer = self.prompt(&format!("{} (y/n): ", question))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    /// Re-prompts until `parse` accepts the answer.
    ///
    /// With `optional`, a blank answer ends the loop with `None`; otherwise
    /// a value is always returned as `Some`.
    fn prompt_parsed<T>(
        &mut self,
        message: &str,
        optional: bool,
        parse: fn(&str) -> ValidationResult<T>,
    ) -> CliResult<Option<T>> {
        loop {
            let answer = self.prompt(message)?;
            if answer.is_empty() {
                if optional {
                    return Ok(None);
                }
                self.warn("Input cannot be empty.")?;
                continue;
            }

            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.warn(e)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            DisplaySettings::plain(),
        )
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_trims() {
        let mut c = console("  Blue Ink  \n");
        assert_eq!(c.prompt("Name: ").unwrap(), "Blue Ink");
        assert_eq!(output(c), "Name: ");
    }

    #[test]
    fn test_prompt_eof_is_input_closed() {
        let mut c = console("");
        assert!(matches!(c.prompt("Name: "), Err(CliError::InputClosed)));
    }

    #[test]
    fn test_prompt_non_empty_reprompts() {
        let mut c = console("\n   \nInk\n");
        assert_eq!(c.prompt_non_empty("Name: ").unwrap(), "Ink");

        let out = output(c);
        assert_eq!(out.matches("Input cannot be empty.").count(), 2);
    }

    #[test]
    fn test_prompt_price_rejects_until_valid() {
        let mut c = console("abc\n0\n-3\n4.25\n");
        assert_eq!(c.prompt_price("Price: ").unwrap(), 4.25);

        let out = output(c);
        assert!(out.contains("| !! price has invalid format: 'abc' is not a number"));
        assert_eq!(out.matches("price must be greater than zero").count(), 2);
    }

    #[test]
    fn test_prompt_quantity_rejects_fractions() {
        let mut c = console("2.5\n-1\n7\n");
        assert_eq!(c.prompt_quantity("Quantity: ").unwrap(), 7);

        let out = output(c);
        assert!(out.contains("not a whole number"));
        assert!(out.contains("quantity cannot be negative"));
    }

    #[test]
    fn test_optional_prompts_accept_blank() {
        let mut c = console("\n\n");
        assert_eq!(c.prompt_optional_price("Price: ").unwrap(), None);
        assert_eq!(c.prompt_optional_quantity("Quantity: ").unwrap(), None);
    }

    #[test]
    fn test_prompt_replacement() {
        let mut c = console("\nStationery\n");
        assert_eq!(c.prompt_replacement("New name", "Ink").unwrap(), None);
        assert_eq!(
            c.prompt_replacement("New category", "Office").unwrap(),
            Some("Stationery".to_string())
        );

        let out = output(c);
        assert!(out.contains("New name (current: Ink): "));
    }

    #[test]
    fn test_confirm() {
        let mut c = console("y\nYES\nn\nsure\n");
        assert!(c.confirm("Apply?").unwrap());
        assert!(c.confirm("Apply?").unwrap());
        assert!(!c.confirm("Apply?").unwrap());
        assert!(!c.confirm("Apply?").unwrap());
    }

    #[test]
    fn test_plain_settings_skip_pause_and_clear() {
        let mut c = console("");
        // No input is consumed, so EOF is never reached
        c.pause().unwrap();
        assert_eq!(output(c), "");
    }

    #[test]
    fn test_pause_waits_for_enter() {
        let settings = DisplaySettings {
            clear_screen: false,
            pause_after_action: true,
            rule_width: 40,
        };
        let mut c = Console::new(Cursor::new(b"\n".to_vec()), Vec::new(), settings);
        c.pause().unwrap();
        assert!(output(c).contains("Press Enter to return to the menu..."));
    }

    #[test]
    fn test_clear_writes_escape_codes() {
        let settings = DisplaySettings {
            clear_screen: true,
            pause_after_action: false,
            rule_width: 40,
        };
        let mut c = Console::new(Cursor::new(Vec::new()), Vec::new(), settings);
        c.clear().unwrap();
        assert!(output(c).contains("\u{1b}["));
    }

    #[test]
    fn test_banner() {
        let mut c = console("");
        c.banner("Add Product").unwrap();

        let out = output(c);
        let rule = "=".repeat(100);
        assert_eq!(out, format!("\n{rule}\n                Add Product\n{rule}\n"));
    }
}
