//! Build stage: clean, configure, compile
//!
//! Brings the workspace to a known-clean, freshly-configured,
//! freshly-compiled state before any test is trusted to run.
//!
//! Clean and configure are best-effort: their exit statuses (and even launch
//! failures) are deliberately swallowed, because a real breakage there is
//! caught by the subsequent compile step. Only a compile failure is fatal,
//! and it aborts the run before any test case is attempted.

use std::io::Write;

use thiserror::Error;

use crate::config::SuiteConfig;
use crate::exec::{CommandRunner, CommandSpec};

/// Errors that terminate the build stage
#[derive(Debug, Error)]
pub enum BuildError {
    /// The compile command exited non-zero or could not be launched.
    /// This is the only fatal condition in the harness.
    #[error("Make error!")]
    CompileFailed,
}

/// Run clean, configure, and compile, in that order.
///
/// Returns `Err(BuildError::CompileFailed)` if and only if the compile step
/// fails; the caller must not attempt any test case in that event.
#[tracing::instrument(skip_all)]
pub fn prepare_workspace(
    config: &SuiteConfig,
    exec: &dyn CommandRunner,
) -> Result<(), BuildError> {
    run_best_effort(exec, &config.clean);
    run_best_effort(exec, &config.configure);

    print!("Recompiling tests... ");
    let _ = std::io::stdout().flush();

    let compiled = match exec.run(&config.compile) {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!(error = %e, "compile command failed to launch");
            false
        }
    };

    if !compiled {
        return Err(BuildError::CompileFailed);
    }

    // Separate the build output from the test phase
    println!();
    println!();

    Ok(())
}

/// Invoke a best-effort step, swallowing both a non-zero exit and a launch
/// failure.
fn run_best_effort(exec: &dyn CommandRunner, command: &CommandSpec) {
    match exec.run(command) {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!(command = %command.display(), "best-effort step exited non-zero");
        }
        Err(e) => {
            tracing::debug!(command = %command.display(), error = %e, "best-effort step failed to launch");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
