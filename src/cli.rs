//! CLI module for the test harness
//!
//! The harness takes no positional arguments and no behavior-changing
//! flags; it is invoked with zero configuration and runs to completion or
//! fatal abort. clap still provides `--help` and `--version`.
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling
//! `process::exit`. Only the top-level `run()` function handles errors and
//! exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::process;

use clap::Parser;

use crate::build_stage;
use crate::config::SuiteConfig;
use crate::exec::{CommandRunner, ProcessRunner};
use crate::runner::{self, TestRunner};
use crate::version::ALLTESTS_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Build-and-test orchestration harness
#[derive(Parser, Debug)]
#[command(name = "alltests")]
#[command(version = ALLTESTS_VERSION)]
#[command(
    about = "Cleans, configures, and compiles the test suite, then runs every test case",
    long_about = None
)]
pub struct Cli {}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. The orchestration
/// returns `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the run with the fixed configuration and real subprocesses.
fn execute(_cli: Cli) -> CliResult<ExitCode> {
    orchestrate(&SuiteConfig::default(), &ProcessRunner)
}

/// The full orchestration sequence: build stage, test runner, summary.
///
/// A compile failure aborts before any test case is attempted. Otherwise
/// every listed test case runs exactly once, in order, exactly one verdict
/// line is printed, and the process exits zero: test-case failures are
/// reflected in the verdict line only, never in the exit status. The fatal
/// compile abort is the sole non-zero exit.
pub fn orchestrate(config: &SuiteConfig, exec: &dyn CommandRunner) -> CliResult<ExitCode> {
    build_stage::prepare_workspace(config, exec).map_err(|e| CliError::failure(e.to_string()))?;

    let mut tester = TestRunner::new(exec);
    for case in &config.suite {
        tester.run_test_case(case);
    }

    println!("{}", runner::verdict(tester.fail_count()));

    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::exec::scripted::{Outcome, ScriptedRunner};
    use crate::exec::CommandSpec;

    #[test]
    fn test_cli_parses_with_no_arguments() {
        assert!(Cli::try_parse_from(["alltests"]).is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["alltests", "--parallel"]).is_err());
        assert!(Cli::try_parse_from(["alltests", "backend"]).is_err());
    }

    #[test]
    fn test_compile_failure_aborts_before_any_test() {
        let config = SuiteConfig {
            clean: CommandSpec::new("clean-cmd", &[]),
            configure: CommandSpec::new("configure-cmd", &[]),
            compile: CommandSpec::new("compile-cmd", &[]),
            suite: vec!["backend".to_string(), "models".to_string()],
        };
        let exec = ScriptedRunner::new(&[("compile-cmd", Outcome::Exit(false))]);

        let result = orchestrate(&config, &exec);

        let err = result.unwrap_err();
        assert_eq!(err.message, "Make error!");
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        // No test executable was ever invoked
        assert_eq!(
            exec.invocations(),
            vec!["clean-cmd", "configure-cmd", "compile-cmd"]
        );
    }

    #[test]
    fn test_failing_suite_still_exits_zero() {
        let config = SuiteConfig {
            clean: CommandSpec::new("clean-cmd", &[]),
            configure: CommandSpec::new("configure-cmd", &[]),
            compile: CommandSpec::new("compile-cmd", &[]),
            // A case with no directory is guaranteed to count as a failure
            suite: vec!["no_such_case".to_string()],
        };
        let exec = ScriptedRunner::new(&[]);

        // The verdict line carries the failure; the exit status does not
        let result = orchestrate(&config, &exec).unwrap();
        assert_eq!(result, ExitCode::SUCCESS);
    }
}
