//! Logging setup.
//!
//! Diagnostics go to stderr; stdout carries only generated code. The filter
//! is scoped to this crate's targets, so the framework-fallback warning is
//! the only thing a default run can print.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, ColorChoice};

/// Environment variable holding a raw filter directive, e.g. `debug` or
/// `cppbdd::emitter=trace`. Overrides `-v` when set and valid.
pub const LOG_LEVEL_ENV: &str = "CPPBDD_LOG_LEVEL";

const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact lines without timestamps, optionally colored.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Logging configuration derived from the global command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    /// Output format.
    pub format: LogFormat,
    /// Level for this crate's events; `None` when `--quiet`.
    pub level: Option<&'static str>,
    /// Whether to print event targets (from `-vv` on).
    pub show_target: bool,
    /// Color preference for human output.
    pub color: ColorChoice,
}

impl LogSettings {
    /// Builds settings from parsed arguments.
    ///
    /// `-v` raises the level one step per occurrence: warn, info, debug,
    /// then trace. `--quiet` wins over any count.
    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        let level = if cli.quiet {
            None
        } else {
            Some(match cli.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            })
        };

        Self {
            format: cli.log_format,
            level,
            show_target: cli.verbose >= 2,
            color: cli.color,
        }
    }

    /// Filter directive, preferring a non-blank `env_override`.
    ///
    /// Returns `off` when quiet.
    #[must_use]
    pub fn directive(&self, env_override: Option<&str>) -> String {
        match (self.level, env_override.map(str::trim)) {
            (None, _) => "off".to_string(),
            (Some(_), Some(raw)) if !raw.is_empty() => raw.to_string(),
            (Some(level), _) => format!("{CRATE_TARGET}={level}"),
        }
    }

    /// Whether human output should carry ANSI colors.
    #[must_use]
    pub const fn use_ansi(&self, stderr_is_terminal: bool, no_color: bool) -> bool {
        match self.color {
            ColorChoice::Auto => stderr_is_terminal && !no_color,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    fn filter(&self) -> EnvFilter {
        let env = std::env::var(LOG_LEVEL_ENV).ok();
        EnvFilter::try_new(self.directive(env.as_deref())).unwrap_or_else(|e| {
            eprintln!("warning: ignoring invalid {LOG_LEVEL_ENV}: {e}");
            EnvFilter::new(self.directive(None))
        })
    }
}

/// Installs the global subscriber. Does nothing when quiet.
///
/// Uses `try_init()` so calling this more than once (e.g. in tests) is safe.
pub fn init_logging(settings: &LogSettings) {
    if settings.level.is_none() {
        return;
    }

    let filter = settings.filter();

    match settings.format {
        LogFormat::Human => {
            let use_ansi = settings.use_ansi(
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            );
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .without_time()
                .with_ansi(use_ansi)
                .with_target(settings.show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(settings.show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
