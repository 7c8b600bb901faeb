//! CLI module for phpcompat
//!
//! ## Usage
//!
//! - `phpcompat [--test-version RANGE] [--report full|summary|json] [-n] <PATH>...`
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::{self, ReportFormat, RunConfig};
use crate::version::PHPCOMPAT_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    /// No violations were reported.
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// At least one violation was reported.
    pub const VIOLATIONS: ExitCode = ExitCode(1);
    /// Bad arguments, unreadable input or invalid configuration.
    pub const FAILURE: ExitCode = ExitCode(2);
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

    /// Create a failure error (exit code 2).
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

/// Check PHP code for names that clash with reserved keywords
#[derive(Parser, Debug)]
#[command(name = "phpcompat")]
#[command(version = PHPCOMPAT_VERSION)]
#[command(about = "Check PHP code for cross-version compatibility problems", long_about = None)]
pub struct Cli {
    /// Files or directories to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// PHP versions to support, e.g. `7.2`, `7.0-`, `-7.4` or `5.6-7.4` [env: PHPCOMPAT_TEST_VERSION]
    #[arg(long = "test-version", value_name = "RANGE")]
    pub test_version: Option<String>,

    /// Comma-separated extensions to check when walking directories
    #[arg(long, value_name = "EXT", value_delimiter = ',', default_value = "php,inc")]
    pub extensions: Vec<String>,

    /// Only report errors
    #[arg(short = 'n', long = "no-warnings")]
    pub no_warnings: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Full)]
    pub report: ReportFormat,
}

impl Cli {
    /// Build the run configuration, consulting `env_test_version` when no flag was given.
    pub fn to_config(&self, env_test_version: Option<&str>) -> CliResult<RunConfig> {
        let test_version = config::resolve_test_version(self.test_version.as_deref(), env_test_version)
            .map_err(|e| CliError::failure(format!("Error: {e}")))?;

        Ok(RunConfig::new()
            .with_test_version(test_version)
            .with_extensions(&self.extensions)
            .with_show_warnings(!self.no_warnings)
            .with_report(self.report))
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
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

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let env_test_version = env::var(config::TEST_VERSION_ENV).ok();
    let config = cli.to_config(env_test_version.as_deref())?;
    tracing::info!(test_version = %config.test_version, paths = cli.paths.len(), "starting check");
    commands::check_paths(&config, &cli.paths)
}

// ============================================================================
// Tests
// ============================================================================
