//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod generate;

use crate::cli::args::Cli;
use crate::error::ElmDocsError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), ElmDocsError> {
    generate::run(cli).map(|_| ())
}
