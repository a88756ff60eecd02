//! Document loader
//!
//! Reads a scenario document from disk (or stdin when the path is `-`),
//! enforces the size limit, and parses it into a [`Document`].

use crate::document::schema::Document;
use crate::error::DocumentError;

use std::io::Read;
use std::path::{Path, PathBuf};

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Default maximum document size in bytes (1 MiB).
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 1024 * 1024;

// ============================================================================
// Public API
// ============================================================================

/// Options for the document loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Maximum document size in bytes.
    pub max_document_size: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_document_size: env_or("CPPBDD_MAX_DOCUMENT_SIZE", DEFAULT_MAX_DOCUMENT_SIZE),
        }
    }
}

/// Loads scenario documents.
#[derive(Debug, Default)]
pub struct DocumentLoader {
    options: LoaderOptions,
}

impl DocumentLoader {
    /// Creates a loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Returns the options this loader was built with.
    #[must_use]
    pub const fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Loads a document from `path`, or from stdin when `path` is `-`.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::MissingFile` if the file does not exist,
    /// `DocumentError::TooLarge` if it exceeds the size limit, and any error
    /// from [`load_from_str`](Self::load_from_str).
    pub fn load(&self, path: &Path) -> Result<Document, DocumentError> {
        tracing::debug!(path = %path.display(), "loading document");

        let content = if path.as_os_str() == STDIN_PATH {
            self.read_limited(std::io::stdin().lock(), path)?
        } else {
            let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

            let file_size = usize::try_from(metadata.len())
                .unwrap_or_else(|_| self.options.max_document_size.saturating_add(1));
            self.check_size(path, file_size)?;

            std::fs::read_to_string(path).map_err(|e| io_error(path, e))?
        };

        self.load_from_str(&content, path)
    }

    /// Parses a document from YAML text. `origin` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Empty` for blank input,
    /// `DocumentError::TooLarge` if the text exceeds the size limit, and
    /// `DocumentError::Parse` if the YAML does not describe a document.
    pub fn load_from_str(&self, content: &str, origin: &Path) -> Result<Document, DocumentError> {
        self.check_size(origin, content.len())?;

        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        if content.trim().is_empty() {
            return Err(DocumentError::Empty {
                path: origin.to_path_buf(),
            });
        }

        let document: Document =
            serde_yaml::from_str(content).map_err(|e| DocumentError::Parse {
                path: origin.to_path_buf(),
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %origin.display(),
            scenarios = document.scenario_count(),
            "document loaded"
        );

        Ok(document)
    }

    /// Reads at most one byte past the size limit from `reader`, so an
    /// oversized stream is rejected without being buffered whole.
    fn read_limited<R: Read>(&self, reader: R, path: &Path) -> Result<String, DocumentError> {
        let limit = self.options.max_document_size;
        let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);

        let mut bytes = Vec::new();
        reader
            .take(cap)
            .read_to_end(&mut bytes)
            .map_err(|e| io_error(path, e))?;
        self.check_size(path, bytes.len())?;

        String::from_utf8(bytes).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }

    fn check_size(&self, path: &Path, size: usize) -> Result<(), DocumentError> {
        let limit = self.options.max_document_size;
        if size > limit {
            return Err(DocumentError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn io_error(path: &Path, source: std::io::Error) -> DocumentError {
    if source.kind() == std::io::ErrorKind::NotFound {
        DocumentError::MissingFile {
            path: path.to_path_buf(),
        }
    } else {
        DocumentError::Io {
            path: PathBuf::from(path),
            source,
        }
    }
}

/// Reads an environment variable, falling back to `default` when unset or
/// unparsable.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
