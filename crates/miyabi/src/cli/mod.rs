//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the miyabi binary.

mod check;
mod commands;
mod generate;

pub use check::{CheckReport, handle_check_command};
pub use commands::{Cli, Commands};
pub use generate::{handle_generate_command, guess_image_mime};
