//! `completions` subcommand.
//!
//! Scripts complete the generator's own surface: the `<FILE>` positional,
//! `--framework`/`--group`, and the `check`/`version` subcommands.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell as ClapShell;

use crate::cli::args::{Cli, CompletionsArgs, Shell};
use crate::error::CppBddError;

/// Name completions are registered under.
pub const BIN_NAME: &str = env!("CARGO_PKG_NAME");

impl From<Shell> for ClapShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
            Shell::Elvish => Self::Elvish,
        }
    }
}

/// Write the completion script for `shell` into `out`.
///
/// # Errors
///
/// Returns an I/O error if `out` cannot be flushed.
pub fn render(shell: Shell, out: &mut impl Write) -> std::io::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(ClapShell::from(shell), &mut cmd, BIN_NAME, out);
    out.flush()
}

/// Print the completion script for `args.shell` to stdout.
///
/// # Errors
///
/// Returns an I/O error if stdout cannot be written.
pub fn run(args: &CompletionsArgs) -> Result<(), CppBddError> {
    render(args.shell, &mut std::io::stdout().lock())?;
    Ok(())
}
