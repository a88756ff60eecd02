//! `check` command: validate documents without printing generated code.

use std::path::Path;

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::document::DocumentLoader;
use crate::emitter::{self, DEFAULT_GROUP, Dialect};
use crate::error::CppBddError;

/// Outcome of checking a single document.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Path that was checked.
    pub path: String,
    /// Number of scenarios found (zero when loading failed).
    pub scenarios: usize,
    /// Failure message, if the document is invalid.
    pub error: Option<String>,
}

impl CheckOutcome {
    /// Whether the document can be rendered.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Validate each document and report the results on stdout.
///
/// # Errors
///
/// Returns `CppBddError::CheckFailed` if any document is invalid, or a JSON
/// error if the report cannot be serialized.
pub fn run(args: &CheckArgs) -> Result<(), CppBddError> {
    let loader = DocumentLoader::with_defaults();
    let outcomes: Vec<CheckOutcome> = args
        .files
        .iter()
        .map(|path| check_file(&loader, path))
        .collect();

    let total = outcomes.len();
    let failed = outcomes.iter().filter(|o| !o.is_valid()).count();

    match args.format {
        OutputFormat::Human => {
            for outcome in &outcomes {
                match &outcome.error {
                    None => println!(
                        "✓ {} ({} scenarios)",
                        outcome.path, outcome.scenarios
                    ),
                    Some(error) => println!("✗ {}: {error}", outcome.path),
                }
            }
            println!();
            println!("{} valid, {failed} invalid", total - failed);
        }
        OutputFormat::Json => {
            let files: Vec<serde_json::Value> = outcomes
                .iter()
                .map(|o| {
                    serde_json::json!({
                        "path": o.path,
                        "valid": o.is_valid(),
                        "scenarios": o.scenarios,
                        "error": o.error,
                    })
                })
                .collect();
            let report = serde_json::json!({
                "files": files,
                "summary": {
                    "total": total,
                    "valid": total - failed,
                    "invalid": failed,
                },
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if failed > 0 {
        return Err(CppBddError::CheckFailed { failed, total });
    }
    Ok(())
}

/// Load and render one document, discarding the output.
///
/// Both dialects check the same fields, so rendering once is enough.
#[must_use]
pub fn check_file(loader: &DocumentLoader, path: &Path) -> CheckOutcome {
    let result = loader.load(path).map_err(CppBddError::from).and_then(|doc| {
        emitter::emit(&doc, Dialect::default(), DEFAULT_GROUP)?;
        Ok(doc.scenario_count())
    });

    match result {
        Ok(scenarios) => CheckOutcome {
            path: path.display().to_string(),
            scenarios,
            error: None,
        },
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "document invalid");
            CheckOutcome {
                path: path.display().to_string(),
                scenarios: 0,
                error: Some(e.to_string()),
            }
        }
    }
}
