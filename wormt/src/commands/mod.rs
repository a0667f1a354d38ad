//! Command modules for the wormt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod render;
pub mod traits;

pub mod check;
pub mod tokenize;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use traits::{Command, CommandDescription};

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use tokenize::{TokenizeArgs, TokenizeCommand};

/// Create and execute a command.
pub fn run<C>(args: C::Args, config: Config) -> Result<C::Output>
where
    C: Command + CommandDescription,
{
    debug!(command = C::name(), "{}", C::description());
    C::new(args, config).execute()
}
