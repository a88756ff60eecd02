//! CLI argument definitions
//!
//! All Clap derive structs for `cppbdd` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::emitter::DEFAULT_GROUP;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Generate Catch2 or GoogleTest BDD skeletons from YAML scenario descriptions.
///
/// Without a subcommand, renders `<FILE>` to stdout.
#[derive(Parser, Debug)]
#[command(name = "cppbdd", author, version, about)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Generation arguments (used when no subcommand is given).
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "CPPBDD_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "CPPBDD_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate documents without printing generated code.
    Check(CheckArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for generating a test skeleton.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// YAML scenario document (`-` reads stdin).
    #[arg(required = true, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Target framework: `catch2` or `gtest`. Unrecognized names fall back
    /// to `catch2`.
    #[arg(short, long, default_value = "catch2", env = "CPPBDD_FRAMEWORK")]
    pub framework: String,

    /// Group label used as the gtest suite name or Catch2 tag.
    #[arg(short, long, default_value = DEFAULT_GROUP, env = "CPPBDD_GROUP")]
    pub group: String,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Documents to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
