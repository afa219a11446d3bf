//! Command trait and common types for the matt CLI.
//!
//! This module defines the standard command traits that all commands
//! implement to keep their structure consistent.

use crate::error::Result;

/// Standard command trait that all matt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Trait for providing a one-line command description.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;
}
