//! Scenario document schema
//!
//! Types deserialized from the YAML behavior description. Every field is
//! optional at this layer; required fields are checked by the emitter when
//! they are about to be rendered.

use serde::{Deserialize, Serialize};

// ============================================================================
// Document
// ============================================================================

/// Root of a behavior description: the story narrative plus its scenarios.
///
/// ```yaml
/// title: Login
/// as-a: user
/// i-want: to log in
/// so-that: I access my data
/// scenarios:
///   - scenario: Valid login
///     given: a registered user
///     when: correct credentials submitted
///     then: session is created
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Story title (required, non-empty)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Actor of the story
    #[serde(
        default,
        rename = "as-a",
        alias = "as_a",
        skip_serializing_if = "Option::is_none"
    )]
    pub as_a: Option<String>,

    /// Goal of the story
    #[serde(
        default,
        rename = "i-want",
        alias = "i_want",
        skip_serializing_if = "Option::is_none"
    )]
    pub i_want: Option<String>,

    /// Benefit of the story
    #[serde(
        default,
        rename = "so-that",
        alias = "so_that",
        skip_serializing_if = "Option::is_none"
    )]
    pub so_that: Option<String>,

    /// Ordered scenarios (required, non-empty)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<Vec<Scenario>>,
}

impl Document {
    /// Number of scenarios in the document, zero when the list is absent.
    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.scenarios.as_ref().map_or(0, Vec::len)
    }
}

// ============================================================================
// Scenario
// ============================================================================

/// A single given/when/then case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,

    /// Precondition (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,

    /// Action (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,

    /// Expected outcome (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub then: Option<String>,
}
