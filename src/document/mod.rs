//! Scenario documents
//!
//! The YAML behavior description and the loader that reads it.

pub mod loader;
pub mod schema;

pub use loader::{DocumentLoader, LoaderOptions};
pub use schema::{Document, Scenario};
