//! Fixed harness configuration
//!
//! The command lines and the test-case list are fixed for a given run; there
//! is no runtime configurability. They are lifted into an explicit
//! `SuiteConfig` structure so the orchestration logic can be driven against
//! scratch suites in tests.

use crate::exec::CommandSpec;

/// Removes prior build outputs. Exit status ignored: a clean that "fails"
/// because there was nothing to clean is not an error.
pub const CLEAN_COMMAND: (&str, &[&str]) = ("make", &["-s", "distclean"]);

/// Regenerates build-system input files from project metadata. Best-effort.
/// Unlike the other command strings, this one is not pinned to an install
/// location: `qmake` was historically invoked via an absolute Qt 4.4.3 path
/// and is resolved from PATH here so any Qt toolchain works.
pub const CONFIGURE_COMMAND: (&str, &[&str]) = ("qmake", &[]);

/// Builds the project's executables, including the per-test-case binaries.
/// Exit status is authoritative: a failure here aborts the entire run.
pub const COMPILE_COMMAND: (&str, &[&str]) = ("make", &["-j", "2", "-s"]);

/// The ordered test suite. Each identifier names both the subdirectory to
/// enter and the executable `<identifier>_test` to invoke within it.
pub const TEST_SUITE: &[&str] = &["backend", "models", "xep82"];

/// Configuration for one harness run: the three build commands and the
/// ordered list of test-case identifiers.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub clean: CommandSpec,
    pub configure: CommandSpec,
    pub compile: CommandSpec,
    pub suite: Vec<String>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            clean: CommandSpec::new(CLEAN_COMMAND.0, CLEAN_COMMAND.1),
            configure: CommandSpec::new(CONFIGURE_COMMAND.0, CONFIGURE_COMMAND.1),
            compile: CommandSpec::new(COMPILE_COMMAND.0, COMPILE_COMMAND.1),
            suite: TEST_SUITE.iter().map(|s| s.to_string()).collect(),
        }
    }
}
