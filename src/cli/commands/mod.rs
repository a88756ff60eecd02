//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check;
pub mod completions;
pub mod generate;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::CppBddError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), CppBddError> {
    match cli.command {
        Some(Commands::Check(args)) => check::run(&args),
        Some(Commands::Completions(args)) => completions::run(&args),
        Some(Commands::Version(args)) => {
            version::run(&args);
            Ok(())
        }
        None => generate::run(&cli.generate),
    }
}
