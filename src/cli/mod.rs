//! Command-line interface
//!
//! Argument definitions and command handlers for the `cppbdd` binary.

pub mod args;
pub mod commands;
