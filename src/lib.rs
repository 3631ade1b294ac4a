#![forbid(unsafe_code)]
//! Build-and-test orchestration harness
//!
//! `alltests` resets a project's build artifacts, regenerates build
//! configuration, compiles the suite of test binaries, then executes each
//! test binary inside its own subdirectory, collecting pass/fail outcomes
//! into a single summary verdict.
//!
//! The run has two strictly sequential phases:
//!
//! - **Build stage** (`build_stage`): clean, configure, compile. Clean and
//!   configure are best-effort; a compile failure aborts the whole run
//!   before any test executes.
//! - **Test runner** (`runner`): each test case runs in its own working
//!   directory, failures are counted but never stop later cases, and the
//!   final verdict is derived from the failure count alone.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod build_stage;
pub mod cli;
pub mod config;
pub mod exec;
pub mod runner;
pub mod version;

pub use build_stage::BuildError;
pub use config::SuiteConfig;
pub use exec::{CommandRunner, CommandSpec, ExecError, ProcessRunner};
pub use runner::TestRunner;
