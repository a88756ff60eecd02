//! `cppbdd` - BDD test skeleton generator for C++
//!
//! Turns a YAML story (title, narrative, and given/when/then scenarios)
//! into Catch2 or GoogleTest scaffolding.

pub mod cli;
pub mod document;
pub mod emitter;
pub mod error;
pub mod observability;

pub use document::{Document, DocumentLoader, Scenario};
pub use emitter::{Dialect, emit, normalize_name};
pub use error::{CppBddError, DocumentError, EmitError};
