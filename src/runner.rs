//! Test runner: sequential execution of the test suite
//!
//! Executes a fixed, ordered list of test cases, isolating each one's
//! working directory and failure from the others, and accumulates a single
//! failure count for the summary verdict.
//!
//! A failing test case is data, not an error: the runner records it and
//! moves on. Nothing here terminates the run early, in contrast to the
//! build stage's fatal compile check.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::exec::{CommandRunner, CommandSpec};

/// Verdict line when every test case passed.
pub const ALL_PASSED: &str = "All tests passed.";

/// Verdict line when at least one test case failed.
pub const SOME_FAILED: &str = "Some tests failed!";

/// Select the summary verdict for a finished run.
pub fn verdict(fail_count: u32) -> &'static str {
    if fail_count == 0 { ALL_PASSED } else { SOME_FAILED }
}

// ============================================================================
// Scoped working-directory change
// ============================================================================

/// RAII guard for a scoped change of the process working directory.
///
/// `enter` records the current directory and changes into the target; the
/// original directory is restored when the guard is dropped, on every exit
/// path (success, failure, or abnormal termination of the subprocess).
struct DirGuard {
    original: PathBuf,
}

impl DirGuard {
    fn enter(dir: &Path) -> std::io::Result<Self> {
        let original = env::current_dir()?;
        env::set_current_dir(dir)?;
        Ok(Self { original })
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.original) {
            tracing::error!(
                original = %self.original.display(),
                error = %e,
                "could not restore working directory"
            );
        }
    }
}

// ============================================================================
// Test Runner
// ============================================================================

/// Sequential test-case executor owning the run's failure counter.
///
/// Each test-case identifier names both a subdirectory to enter and the
/// executable `<identifier>_test` to invoke within it. The counter starts
/// at zero, is incremented once per failing case, and is read once at the
/// end to select the verdict.
pub struct TestRunner<'a> {
    exec: &'a dyn CommandRunner,
    out: Box<dyn Write + 'a>,
    fail_count: u32,
}

impl<'a> TestRunner<'a> {
    /// Runner writing its separator lines to stdout.
    pub fn new(exec: &'a dyn CommandRunner) -> Self {
        Self::with_output(exec, io::stdout())
    }

    /// Runner writing its separator lines to the given stream.
    pub fn with_output(exec: &'a dyn CommandRunner, out: impl Write + 'a) -> Self {
        Self {
            exec,
            out: Box::new(out),
            fail_count: 0,
        }
    }

    /// Run one test case to completion.
    ///
    /// Changes into the case's subdirectory for the duration of the call
    /// and restores the prior working directory before returning. A
    /// non-zero exit, a launch failure, or a missing subdirectory all count
    /// as exactly one failure; a passing case counts zero. Emits a blank
    /// separator line after the case, regardless of outcome.
    #[tracing::instrument(skip(self))]
    pub fn run_test_case(&mut self, identifier: &str) {
        let passed = self.invoke(identifier);
        if !passed {
            self.fail_count += 1;
            tracing::warn!(test_case = identifier, "test case failed");
        }

        // Blank separator between test cases
        let _ = writeln!(self.out);
    }

    fn invoke(&self, identifier: &str) -> bool {
        let _guard = match DirGuard::enter(Path::new(identifier)) {
            Ok(guard) => guard,
            Err(e) => {
                tracing::warn!(
                    test_case = identifier,
                    error = %e,
                    "could not enter test-case directory"
                );
                return false;
            }
        };

        let command = CommandSpec::new(&format!("./{identifier}_test"), &[]);
        match self.exec.run(&command) {
            Ok(passed) => passed,
            Err(e) => {
                tracing::warn!(test_case = identifier, error = %e, "test executable did not launch");
                false
            }
        }
    }

    /// Current value of the failure counter.
    pub fn fail_count(&self) -> u32 {
        self.fail_count
    }

    /// Whether every test case run so far has passed.
    pub fn all_passed(&self) -> bool {
        self.fail_count == 0
    }
}

// ============================================================================
// Tests
// ============================================================================
