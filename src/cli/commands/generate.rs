//! Default command: render a document to stdout.

use std::io::Write;
use std::path::Path;

use crate::cli::args::GenerateArgs;
use crate::document::DocumentLoader;
use crate::emitter::{self, Dialect};
use crate::error::CppBddError;

/// Render `args.file` and write the generated code to stdout.
///
/// Nothing is written to stdout unless generation succeeds.
///
/// # Errors
///
/// Returns a document error if loading fails or a required field is
/// missing, and an I/O error if stdout cannot be written.
pub fn run(args: &GenerateArgs) -> Result<(), CppBddError> {
    // Guard for library callers; clap enforces FILE on the command line.
    let path = args
        .file
        .as_deref()
        .ok_or_else(|| CppBddError::Usage("missing <FILE> argument".into()))?;

    let dialect = resolve_dialect(&args.framework);
    let loader = DocumentLoader::with_defaults();
    let output = render_file(&loader, path, dialect, &args.group)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Load `path` and render it in `dialect`.
///
/// # Errors
///
/// Returns the loader or emitter error, whichever comes first.
pub fn render_file(
    loader: &DocumentLoader,
    path: &Path,
    dialect: Dialect,
    group: &str,
) -> Result<String, CppBddError> {
    let document = loader.load(path)?;
    let output = emitter::emit(&document, dialect, group)?;

    tracing::info!(
        path = %path.display(),
        dialect = %dialect,
        scenarios = document.scenario_count(),
        "generated test skeleton"
    );

    Ok(output)
}

/// Map a framework name to a dialect, warning when it falls back.
#[must_use]
pub fn resolve_dialect(name: &str) -> Dialect {
    if let Some(dialect) = Dialect::parse(name) {
        return dialect;
    }

    let fallback = Dialect::default();
    match Dialect::suggest(name) {
        Some(suggestion) => tracing::warn!(
            framework = name,
            fallback = %fallback,
            "unknown framework '{name}' (did you mean '{suggestion}'?), using {fallback}"
        ),
        None => tracing::warn!(
            framework = name,
            fallback = %fallback,
            "unknown framework '{name}', using {fallback}"
        ),
    }
    fallback
}
