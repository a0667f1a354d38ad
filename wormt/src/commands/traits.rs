//! Command traits for the wormt CLI.
//!
//! This module defines the standard command traits that all commands
//! implement to ensure consistency across the application.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all wormt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance from its arguments and the loaded
    /// configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Trait for providing command descriptions.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;
}
