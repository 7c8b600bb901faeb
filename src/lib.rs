#![forbid(unsafe_code)]
//! phpcompat: PHP cross-version compatibility checks
//!
//! Sniffs inspect declarations in PHP source files and report code that breaks, or is discouraged, on the PHP
//! versions the project targets (the `testVersion`).
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: use `.expect("INVARIANT: reason")`.
//!
//! ## Concurrency
//!
//! Sniffs are `Send + Sync` and stateless per call; a [`SniffRegistry`] can be shared by reference across threads
//! and scanners without locking.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod report;
pub mod scanner;
pub mod sniffs;
pub mod version;

pub use phpcompat_syntax as syntax;

pub use config::{ReportFormat, RunConfig};
pub use diagnostics::{Diagnostic, DiagnosticSink, Severity, Violation};
pub use scanner::{ScanError, Scanner};
pub use sniffs::{Sniff, SniffRegistry};
