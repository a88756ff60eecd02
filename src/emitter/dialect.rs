//! Output dialects.
//!
//! Each dialect targets one C++ test framework. Both share the same block
//! layout; they differ in the header include and in how scenario
//! declarations and given/when/then clauses are spelled.

use std::fmt;

use crate::emitter::naming::{escape_literal, line_comment, normalize_name};

/// Target test framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// GoogleTest: `TEST(group, name)` with comment clauses.
    Gtest,
    /// Catch2: `SCENARIO(...)` with `GIVEN`/`WHEN`/`THEN` sections.
    #[default]
    Catch2,
}

/// A given/when/then clause kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    /// Precondition
    Given,
    /// Action
    When,
    /// Expected outcome
    Then,
}

impl Clause {
    const fn comment_label(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
        }
    }

    const fn macro_name(self) -> &'static str {
        match self {
            Self::Given => "GIVEN",
            Self::When => "WHEN",
            Self::Then => "THEN",
        }
    }
}

impl Dialect {
    /// All recognized dialects.
    pub const ALL: [Self; 2] = [Self::Gtest, Self::Catch2];

    /// Canonical command-line name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gtest => "gtest",
            Self::Catch2 => "catch2",
        }
    }

    /// Recognizes a dialect by its exact canonical name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Resolves a dialect name, falling back to [`Dialect::Catch2`] for
    /// anything unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Closest recognized name for a misspelled one.
    ///
    /// Case and surrounding whitespace are ignored here, so `GTEST` still
    /// suggests `gtest` even though [`Dialect::parse`] rejects it.
    ///
    /// Returns a match only if its Damerau-Levenshtein distance is ≤ 2.
    #[must_use]
    pub fn suggest(input: &str) -> Option<&'static str> {
        let input = input.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .map(|d| (d.name(), strsim::damerau_levenshtein(&input, d.name())))
            .filter(|(_, dist)| *dist <= 2)
            .min_by_key(|(_, dist)| *dist)
            .map(|(name, _)| name)
    }

    /// Framework include line.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Gtest => "#include <gtest/gtest.h>",
            Self::Catch2 => "#include <catch2/catch_test_macros.hpp>",
        }
    }

    /// Test or scenario declaration line.
    #[must_use]
    pub fn declaration(self, group: &str, scenario: &str) -> String {
        match self {
            Self::Gtest => format!(
                "TEST({}, {})",
                normalize_name(group),
                normalize_name(scenario)
            ),
            Self::Catch2 => format!(
                "SCENARIO( \"{}\", \"[{}]\")",
                escape_literal(scenario),
                escape_literal(group)
            ),
        }
    }

    /// Clause without indentation.
    ///
    /// Multi-line gtest clauses span several comment lines.
    #[must_use]
    pub fn clause(self, clause: Clause, text: &str) -> String {
        match self {
            Self::Gtest => line_comment(clause.comment_label(), text),
            Self::Catch2 => format!("{}( \"{}\")", clause.macro_name(), escape_literal(text)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
