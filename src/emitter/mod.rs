//! Test skeleton emitter
//!
//! Renders a [`Document`] into Catch2 or GoogleTest source text. Required
//! fields are checked as they are reached; the first missing one aborts and
//! nothing is returned.

pub mod dialect;
pub mod naming;

pub use dialect::{Clause, Dialect};
pub use naming::{escape_literal, line_comment, normalize_name};

use crate::document::{Document, Scenario};
use crate::error::EmitError;

/// Default group label when none is given.
pub const DEFAULT_GROUP: &str = "default";

/// Marker left in every block for the author to fill in.
const PLACEHOLDER: &str = "// Type code here";

/// One level of indentation.
const INDENT: &str = "    ";

/// Render `document` as `dialect` test source, grouping tests under `group`.
///
/// The returned text is a sequence of newline-terminated lines: the
/// framework include, the story comments, a blank line, then one block per
/// scenario in document order, each followed by a blank line.
///
/// # Errors
///
/// Returns the [`EmitError`] for the first missing required field: the
/// title, the scenario list, or a scenario's name, `when`, or `then`.
pub fn emit(document: &Document, dialect: Dialect, group: &str) -> Result<String, EmitError> {
    let mut lines = Vec::new();

    lines.push(dialect.header().to_string());
    render_story(&mut lines, document)?;
    lines.push(String::new());

    let scenarios = document
        .scenarios
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(EmitError::MissingScenarios)?;

    for (index, scenario) in scenarios.iter().enumerate() {
        render_scenario(&mut lines, scenario, index, dialect, group)?;
    }

    tracing::debug!(
        dialect = %dialect,
        group,
        scenarios = scenarios.len(),
        "rendered test skeleton"
    );

    let mut output = lines.join("\n");
    output.push('\n');
    Ok(output)
}

/// Title plus the optional as-a / i-want / so-that comments.
fn render_story(lines: &mut Vec<String>, document: &Document) -> Result<(), EmitError> {
    let title = document
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or(EmitError::MissingTitle)?;
    lines.push(line_comment("Title:", title));

    let narrative = [
        ("As a:", &document.as_a),
        ("I want:", &document.i_want),
        ("So that:", &document.so_that),
    ];
    for (lead, value) in narrative {
        if let Some(value) = value {
            lines.push(line_comment(lead, value));
        }
    }

    Ok(())
}

fn render_scenario(
    lines: &mut Vec<String>,
    scenario: &Scenario,
    index: usize,
    dialect: Dialect,
    group: &str,
) -> Result<(), EmitError> {
    let name = scenario
        .scenario
        .as_deref()
        .ok_or(EmitError::MissingScenarioName { index })?;

    lines.push(dialect.declaration(group, name));
    lines.push("{".to_string());

    if let Some(given) = &scenario.given {
        lines.push(indented(1, &dialect.clause(Clause::Given, given)));
    }
    open_block(lines, 1);
    lines.push(String::new());

    let when = scenario.when.as_deref().ok_or_else(|| EmitError::MissingWhen {
        scenario: name.to_string(),
    })?;
    lines.push(indented(2, &dialect.clause(Clause::When, when)));
    open_block(lines, 2);
    lines.push(String::new());

    let then = scenario.then.as_deref().ok_or_else(|| EmitError::MissingThen {
        scenario: name.to_string(),
    })?;
    lines.push(indented(3, &dialect.clause(Clause::Then, then)));
    open_block(lines, 3);

    for level in (1..=3).rev() {
        lines.push(indented(level, "}"));
    }
    lines.push("}".to_string());
    lines.push(String::new());

    Ok(())
}

/// Opening brace at `level` followed by the placeholder one level deeper.
fn open_block(lines: &mut Vec<String>, level: usize) {
    lines.push(indented(level, "{"));
    lines.push(indented(level + 1, PLACEHOLDER));
}

/// Indent every line of `text` by `level` units.
fn indented(level: usize, text: &str) -> String {
    let prefix = INDENT.repeat(level);
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
