//! Harness version information.
//!
//! This module exposes the harness version as a single constant so all
//! subsystems (CLI, logging) agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The harness version string (for example, `0.1.0`).
pub const ALLTESTS_VERSION: &str = env!("CARGO_PKG_VERSION");
