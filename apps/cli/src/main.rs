//! # Stockroom Entry Point
//!
//! Parses flags and hands over to [`stockroom_cli::run`]. The setup lives in
//! the library so it can be tested.

use std::process::ExitCode;

use clap::Parser;
use stockroom_cli::Cli;

fn main() -> ExitCode {
    match stockroom_cli::run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("stockroom: {e}");
            ExitCode::FAILURE
        }
    }
}
