//! CLI module
//!
//! Command-line lookup of a single vulnerability or exploit. The instance
//! is probed first; the JSON record is printed with 2-space indentation.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{failure_message, Runner};
