//! Shared integration-test harness for running the `cppbdd` binary.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Helpers for invoking the compiled `cppbdd` binary.
pub struct CppBddProcess;

impl CppBddProcess {
    /// Base command with a clean logging environment.
    fn command() -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_cppbdd"));
        cmd.env_remove("CPPBDD_FRAMEWORK")
            .env_remove("CPPBDD_GROUP")
            .env_remove("CPPBDD_LOG_LEVEL")
            .env_remove("CPPBDD_LOG_FORMAT")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Runs `cppbdd` with `args` and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::command()
            .args(args)
            .stdin(Stdio::null())
            .output()
            .expect("failed to run cppbdd")
    }

    /// Runs `cppbdd` with `args`, feeding `input` on stdin.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_with_stdin(args: &[&str], input: &str) -> Output {
        let mut child = Self::command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn cppbdd");

        child
            .stdin
            .take()
            .expect("stdin not captured")
            .write_all(input.as_bytes())
            .expect("failed to write stdin");

        child.wait_with_output().expect("failed to wait for cppbdd")
    }

    /// Runs `cppbdd` with extra environment variables.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut cmd = Self::command();
        for (key, value) in env {
            cmd.env(key, value);
        }
        cmd.args(args)
            .stdin(Stdio::null())
            .output()
            .expect("failed to run cppbdd")
    }

    /// Absolute path of a file in `tests/fixtures`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Fixture path as a `String` for use in argument lists.
    pub fn fixture(name: &str) -> String {
        Self::fixture_path(name)
            .to_str()
            .expect("non-UTF-8 fixture path")
            .to_string()
    }
}
