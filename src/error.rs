//! Error types for `cppbdd`
//!
//! Loader errors, emitter validation errors, and the top-level error that
//! maps every failure to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `cppbdd` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Document error (invalid YAML, missing required field)
    pub const DOCUMENT_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `cppbdd` operations.
#[derive(Debug, Error)]
pub enum CppBddError {
    /// Document loading error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// A required field was missing during generation
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// One or more documents failed `check`
    #[error("{failed} of {total} documents failed validation")]
    CheckFailed {
        /// Number of invalid documents
        failed: usize,
        /// Number of documents checked
        total: usize,
    },

    /// Invalid command-line usage.
    ///
    /// clap rejects a missing `<FILE>` first; this covers callers that build
    /// `GenerateArgs` directly.
    #[error("{0}")]
    Usage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CppBddError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Document(DocumentError::MissingFile { .. } | DocumentError::Io { .. })
            | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Document(_) | Self::Emit(_) | Self::CheckFailed { .. } => {
                ExitCode::DOCUMENT_ERROR
            }
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Document Errors
// ============================================================================

/// Failures while reading or parsing a scenario document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Referenced document not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Reading the document failed
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path being read (`-` for stdin)
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Document has no content
    #[error("document is empty: {path}")]
    Empty {
        /// Path of the empty document
        path: PathBuf,
    },

    /// Document exceeds the configured size limit
    #[error("document too large: {path} is {size} bytes (limit: {limit})")]
    TooLarge {
        /// Path of the document
        path: PathBuf,
        /// Actual size in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    Parse {
        /// Path of the document
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },
}

// ============================================================================
// Emit Errors
// ============================================================================

/// A required document field was missing when it was about to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// `title` absent or empty
    #[error("title is needed")]
    MissingTitle,

    /// `scenarios` absent or empty
    #[error("scenarios group is needed")]
    MissingScenarios,

    /// A scenario has no `scenario` name
    #[error("scenario name is needed (scenarios[{index}])")]
    MissingScenarioName {
        /// Zero-based position in `scenarios`
        index: usize,
    },

    /// A scenario has no `when` clause
    #[error("'when' is needed in scenario '{scenario}'")]
    MissingWhen {
        /// Display name of the offending scenario
        scenario: String,
    },

    /// A scenario has no `then` clause
    #[error("'then' is needed in scenario '{scenario}'")]
    MissingThen {
        /// Display name of the offending scenario
        scenario: String,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `cppbdd` operations.
pub type Result<T> = std::result::Result<T, CppBddError>;

// ============================================================================
// Tests
// ============================================================================
