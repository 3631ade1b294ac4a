//! Subprocess I/O boundary
//!
//! This module defines the trait-based abstraction for the one kind of I/O
//! the harness performs: running an external command to completion and
//! observing its exit status.
//!
//! The `CommandRunner` trait allows the orchestration logic (build stage and
//! test runner) to be exercised in tests with scripted runners, without
//! spawning real processes. The default implementation preserves the real
//! behavior: spawn, inherit stdio, block until the child exits.

use std::process::Command;

use thiserror::Error;

/// Errors that occur at the subprocess boundary
#[derive(Debug, Error)]
pub enum ExecError {
    /// The command could not be launched at all (missing executable,
    /// permission problem, broken path). Distinct from "ran and exited
    /// non-zero", which is reported through the `Ok(false)` channel.
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },
}

/// A fixed command line: a program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Render the command line for log messages.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

// ============================================================================
// Command Runner Interface
// ============================================================================

/// Run an external command to completion.
///
/// Implement this trait to customize how subprocesses are invoked (e.g.,
/// scripted outcomes in tests). Every invocation blocks until the child
/// terminates; there is no timeout.
pub trait CommandRunner {
    /// Run the command with inherited stdio and wait for it to exit.
    /// Returns `Ok(true)` on a zero exit status, `Ok(false)` on a non-zero
    /// or abnormal exit, and `Err` only when the process could not be
    /// launched in the first place.
    fn run(&self, command: &CommandSpec) -> Result<bool, ExecError>;
}

/// Real subprocess execution (default behavior).
///
/// Stdio is inherited so the child's output streams to the terminal in
/// real time, interleaved with the harness's own progress output.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandSpec) -> Result<bool, ExecError> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .map_err(|source| ExecError::Launch {
                program: command.program.clone(),
                source,
            })?;

        Ok(status.success())
    }
}

// ============================================================================
// Scripted runner for unit tests
// ============================================================================


// ============================================================================
// Tests
// ============================================================================
