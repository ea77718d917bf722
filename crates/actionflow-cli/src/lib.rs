//! ActionFlow CLI library.
//!
//! Command-line front end for the extraction engine: reads meeting notes from an
//! argument, a file, stdin or an interactive prompt, validates them, and prints
//! the extracted action items.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
