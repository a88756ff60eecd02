//! `cppbdd` - BDD test skeleton generator for C++

use clap::Parser;

use cppbdd::cli::args::Cli;
use cppbdd::cli::commands;
use cppbdd::error::ExitCode;
use cppbdd::observability::{LogSettings, init_logging};

fn main() {
    let cli = Cli::parse();

    init_logging(&LogSettings::from_cli(&cli));

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
