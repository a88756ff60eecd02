//! Observability
//!
//! Logging infrastructure for `cppbdd`.

pub mod logging;

pub use logging::{LogFormat, LogSettings, init_logging};
