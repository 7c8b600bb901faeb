//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::config::{ReportFormat, RunConfig};
use crate::diagnostics::Violation;
use crate::report::{self, Counts};
use crate::scanner::Scanner;
use crate::sniffs::SniffRegistry;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Larger files are rejected instead of being read into memory.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let shown = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", shown, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    let bytes = fs::read(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", shown, e)))?;
    // PHP sources are not guaranteed to be UTF-8; names outside ASCII only need to survive as text.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Expand the given paths into the list of files to check.
///
/// Files named explicitly are always checked. Directories are walked recursively, keeping files whose extension
/// is configured and skipping hidden directories. The result is sorted and free of duplicates.
pub fn collect_php_files(paths: &[PathBuf], config: &RunConfig) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            walk_dir(path, config, &mut files);
        } else {
            return Err(CliError::failure(format!("Path not found: {}", path.display())));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn walk_dir(dir: &Path, config: &RunConfig, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot read directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let entry_path = entry.path();
        if entry_path.is_dir() {
            let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if !name.starts_with('.') && !SKIPPED_DIRS.contains(&name) {
                walk_dir(&entry_path, config, files);
            }
        } else if entry_path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| config.wants_extension(ext))
        {
            files.push(entry_path);
        }
    }
}

/// One file's worth of results.
#[derive(Debug)]
pub struct CheckedFile {
    pub path: String,
    pub source: String,
    pub violations: Vec<Violation>,
}

/// Results of checking a set of files.
#[derive(Debug, Default)]
pub struct CheckRun {
    pub files: Vec<CheckedFile>,
    /// Files that could not be read or tokenized
    pub failures: usize,
}

impl CheckRun {
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.files.iter().flat_map(|f| f.violations.iter())
    }

    pub fn counts(&self) -> Counts {
        Counts::of(self.violations())
    }

    /// Failures win over violations.
    pub fn exit_code(&self) -> ExitCode {
        if self.failures > 0 {
            ExitCode::FAILURE
        } else if self.counts().total() > 0 {
            ExitCode::VIOLATIONS
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Scan every file, collecting violations. Unreadable or untokenizable files are logged and counted, and the
/// run carries on with the rest.
pub fn check_files(config: &RunConfig, files: &[PathBuf]) -> CheckRun {
    let registry = SniffRegistry::with_defaults();
    tracing::debug!(sniffs = registry.len(), test_version = %config.test_version, "registry ready");
    let scanner = Scanner::new(&registry, config.test_version);
    let mut run = CheckRun::default();

    for file_path in files {
        let path = file_path.display().to_string();
        let source = match read_source(file_path) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(path = %path, "skipping unreadable file");
                eprintln!("{}", e);
                run.failures += 1;
                continue;
            }
        };

        let mut violations = Vec::new();
        if let Err(e) = scanner.scan(&path, &source, &mut violations) {
            tracing::warn!(path = %path, "skipping file that could not be tokenized");
            eprintln!("{:?}", miette::Report::new(e));
            run.failures += 1;
            continue;
        }

        if !config.show_warnings {
            violations.retain(|v| v.diagnostic.is_error());
        }
        run.files.push(CheckedFile {
            path,
            source,
            violations,
        });
    }

    tracing::info!(files = run.files.len(), failures = run.failures, "check finished");
    run
}

/// Render a finished run in the configured report format.
pub fn render(config: &RunConfig, run: &CheckRun, color: bool) -> String {
    match config.report {
        ReportFormat::Full => {
            let mut out = String::new();
            for file in &run.files {
                for v in &file.violations {
                    out.push_str(&report::render_full(v, &file.source, color));
                }
            }
            let counts = run.counts();
            if counts.total() > 0 {
                out.push_str(&format!(
                    "{} error(s), {} warning(s) in {} file(s) checked\n",
                    counts.errors,
                    counts.warnings,
                    run.files.len()
                ));
            }
            out
        }
        ReportFormat::Summary => {
            let all: Vec<Violation> = run.violations().cloned().collect();
            report::render_summary(&all, run.files.len())
        }
        ReportFormat::Json => {
            let all: Vec<Violation> = run.violations().cloned().collect();
            let mut out = report::render_json(&all);
            out.push('\n');
            out
        }
    }
}

/// Check files and directories, printing the report to stdout.
pub fn check_paths(config: &RunConfig, paths: &[PathBuf]) -> CliResult<ExitCode> {
    let files = collect_php_files(paths, config)?;
    if files.is_empty() {
        return Err(CliError::failure(format!(
            "No files with extension(s) {} found",
            config.extensions.join(", ")
        )));
    }

    let run = check_files(config, &files);
    let color = std::io::stdout().is_terminal();
    print!("{}", render(config, &run, color));

    Ok(run.exit_code())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

    /// A fresh scratch directory under the system temp dir.
    fn scratch_dir() -> PathBuf {
        let n = NEXT_DIR.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!("phpcompat-cmd-{}-{}", std::process::id(), n));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write(dir: &Path, rel: &str, contents: &str) -> PathBuf {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn collects_by_extension_and_skips_hidden_dirs() {
        let dir = scratch_dir();
        write(&dir, "a.php", "<?php");
        write(&dir, "lib/b.inc", "<?php");
        write(&dir, "lib/c.txt", "<?php");
        write(&dir, ".git/d.php", "<?php");
        write(&dir, "node_modules/e.php", "<?php");

        let files = collect_php_files(&[dir.clone()], &RunConfig::new()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(&dir).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["a.php", "lib/b.inc"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn explicit_files_ignore_extension_filter() {
        let dir = scratch_dir();
        let file = write(&dir, "script.phtml", "<?php");
        let files = collect_php_files(std::slice::from_ref(&file), &RunConfig::new()).unwrap();
        assert_eq!(files, vec![file]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = scratch_dir();
        let err = collect_php_files(&[dir.join("nope")], &RunConfig::new()).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn exit_codes_follow_results() {
        let dir = scratch_dir();
        let clean = write(&dir, "clean.php", "<?php class Fine {}");
        let soft = write(&dir, "soft.php", "<?php class Mixed {}");
        let config = RunConfig::new().with_test_version("7.0-".parse().unwrap());

        let run = check_files(&config, std::slice::from_ref(&clean));
        assert_eq!(run.exit_code(), ExitCode::SUCCESS);

        let run = check_files(&config, &[clean.clone(), soft.clone()]);
        assert_eq!(run.counts(), Counts { errors: 0, warnings: 1 });
        assert_eq!(run.exit_code(), ExitCode::VIOLATIONS);

        // Warnings suppressed: nothing left to report.
        let quiet = config.clone().with_show_warnings(false);
        let run = check_files(&quiet, &[clean, soft]);
        assert_eq!(run.exit_code(), ExitCode::SUCCESS);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn untokenizable_file_counts_as_failure() {
        let dir = scratch_dir();
        let broken = write(&dir, "broken.php", "<?php class Int {} /* never closed");
        let ok = write(&dir, "ok.php", "<?php class Int {}");

        let run = check_files(&RunConfig::new(), &[broken, ok]);
        assert_eq!(run.failures, 1);
        assert_eq!(run.files.len(), 1);
        assert_eq!(run.counts().errors, 1);
        assert_eq!(run.exit_code(), ExitCode::FAILURE);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn json_render_ends_with_newline() {
        let dir = scratch_dir();
        let file = write(&dir, "a.php", "<?php class Int {}");
        let config = RunConfig::new().with_report(ReportFormat::Json);
        let run = check_files(&config, &[file]);
        let out = render(&config, &run, false);
        assert!(out.ends_with("]\n"));
        assert!(out.contains("\"intFound\""));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn full_render_is_empty_for_clean_runs() {
        let dir = scratch_dir();
        let file = write(&dir, "a.php", "<?php class Fine {}");
        let config = RunConfig::new();
        let run = check_files(&config, &[file]);
        assert_eq!(render(&config, &run, false), "");
        fs::remove_dir_all(&dir).unwrap();
    }
}
