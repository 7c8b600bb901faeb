//! Run configuration for phpcompat
//!
//! Values come from CLI flags first, then the `PHPCOMPAT_TEST_VERSION` environment variable, then the defaults
//! below.

use clap::ValueEnum;
use phpcompat_core::{TestVersion, VersionError};

/// Environment variable consulted when `--test-version` is not given.
pub const TEST_VERSION_ENV: &str = "PHPCOMPAT_TEST_VERSION";

/// Output format for violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Every violation with its source snippet
    #[default]
    Full,
    /// Error and warning counts per file
    Summary,
    /// Machine-readable JSON array
    Json,
}

/// Run configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// PHP versions the checked code must support
    pub test_version: TestVersion,
    /// File extensions (without dot) picked up when walking directories
    pub extensions: Vec<String>,
    /// Whether warnings are reported at all
    pub show_warnings: bool,
    pub report: ReportFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            test_version: TestVersion::any(),
            extensions: vec!["php".to_string(), "inc".to_string()],
            show_warnings: true,
            report: ReportFormat::Full,
        }
    }
}

impl RunConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_test_version(mut self, test_version: TestVersion) -> Self {
        self.test_version = test_version;
        self
    }

    /// Set the extensions; leading dots are stripped and matching is case-insensitive.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    pub fn with_show_warnings(mut self, show: bool) -> Self {
        self.show_warnings = show;
        self
    }

    pub fn with_report(mut self, report: ReportFormat) -> Self {
        self.report = report;
        self
    }

    /// Whether a path with this extension should be checked when found in a directory.
    pub fn wants_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Pick the test version from the CLI flag, falling back to the environment value.
///
/// Blank values count as unset.
pub fn resolve_test_version(flag: Option<&str>, env: Option<&str>) -> Result<TestVersion, VersionError> {
    let chosen = [flag, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty());

    match chosen {
        Some(value) => value.parse(),
        None => Ok(TestVersion::any()),
    }
}
