//! Render violations for humans and machines.
//!
//! - `full`: one `miette` report per violation, with the offending source line.
//! - `summary`: error and warning counts per file.
//! - `json`: an array of objects, one per violation.

use std::collections::BTreeMap;
use std::fmt;

use miette::{GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceCode};
use serde_json::json;

use crate::diagnostics::{Severity, Violation};

/// Totals over a set of violations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub errors: usize,
    pub warnings: usize,
}

impl Counts {
    pub fn of<'a>(violations: impl IntoIterator<Item = &'a Violation>) -> Self {
        let mut counts = Counts::default();
        for v in violations {
            match v.severity() {
                Severity::Error => counts.errors += 1,
                Severity::Warning => counts.warnings += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }
}

/// A violation paired with its file contents, so `miette` can show the source line.
struct SourcedViolation<'a> {
    violation: &'a Violation,
    source: NamedSource<String>,
}

impl fmt::Debug for SourcedViolation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.violation, f)
    }
}

impl fmt::Display for SourcedViolation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.violation.diagnostic.message)
    }
}

impl std::error::Error for SourcedViolation<'_> {}

impl miette::Diagnostic for SourcedViolation<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.violation.full_code()))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.violation.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.source)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.violation.span;
        let label = format!("declaration of '{}'", self.violation.diagnostic.matched_word);
        Some(Box::new(std::iter::once(LabeledSpan::at(span.start..span.end, label))))
    }
}

/// Render one violation with its source context.
pub fn render_full(violation: &Violation, source: &str, color: bool) -> String {
    let theme = if color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let handler = GraphicalReportHandler::new_themed(theme);

    let sourced = SourcedViolation {
        violation,
        source: NamedSource::new(&violation.path, source.to_string()),
    };

    let mut out = String::new();
    if handler.render_report(&mut out, &sourced).is_err() {
        // Fall back to the one-line form rather than dropping the violation.
        return render_line(violation);
    }
    out
}

/// `path:line:column: severity: message [code]`
pub fn render_line(violation: &Violation) -> String {
    format!(
        "{}:{}:{}: {}: {} [{}]",
        violation.path,
        violation.line,
        violation.column,
        violation.severity(),
        violation.diagnostic.message,
        violation.full_code()
    )
}

/// Per-file counts followed by a totals line. Files are listed in path order.
pub fn render_summary(violations: &[Violation], files_checked: usize) -> String {
    let mut per_file: BTreeMap<&str, Counts> = BTreeMap::new();
    for v in violations {
        let counts = per_file.entry(v.path.as_str()).or_default();
        match v.severity() {
            Severity::Error => counts.errors += 1,
            Severity::Warning => counts.warnings += 1,
        }
    }

    let width = per_file.keys().map(|p| p.len()).max().unwrap_or(4).max(4);
    let mut out = String::new();
    out.push_str(&format!("{:<width$}  {:>6}  {:>8}\n", "FILE", "ERRORS", "WARNINGS"));
    for (path, counts) in &per_file {
        out.push_str(&format!("{:<width$}  {:>6}  {:>8}\n", path, counts.errors, counts.warnings));
    }

    let totals = Counts::of(violations);
    out.push_str(&format!(
        "{} error(s), {} warning(s) in {} of {} file(s)\n",
        totals.errors,
        totals.warnings,
        per_file.len(),
        files_checked
    ));
    out
}

/// JSON array of violations.
pub fn render_json(violations: &[Violation]) -> String {
    let items: Vec<serde_json::Value> = violations
        .iter()
        .map(|v| {
            json!({
                "file": v.path,
                "line": v.line,
                "column": v.column,
                "severity": v.severity().as_str(),
                "source": v.full_code(),
                "code": v.diagnostic.code,
                "word": v.diagnostic.matched_word,
                "declaration": v.diagnostic.declaration_kind,
                "message": v.diagnostic.message,
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::Scanner;
    use crate::sniffs::SniffRegistry;

    const SOURCE: &str = "<?php\nnamespace App\\Object;\nclass Mixed {}\n";

    fn violations() -> Vec<Violation> {
        let registry = SniffRegistry::with_defaults();
        let scanner = Scanner::new(&registry, "7.0-".parse().unwrap());
        let mut sink = Vec::new();
        scanner.scan("src/App.php", SOURCE, &mut sink).unwrap();
        sink
    }

    #[test]
    fn counts_split_by_severity() {
        let counts = Counts::of(&violations());
        assert_eq!(counts, Counts { errors: 1, warnings: 1 });
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn line_format() {
        let v = violations();
        insta::assert_snapshot!(render_line(&v[1]), @"src/App.php:3:1: warning: 'Mixed' is a soft reserved keyword as of PHP version 7.0 and should not be used to name a class, interface or trait or as part of a namespace (class) [Keywords.ForbiddenNamesAsDeclared.mixedFound]");
    }

    #[test]
    fn full_report_includes_source_and_code() {
        let v = violations();
        let out = render_full(&v[0], SOURCE, false);
        assert!(out.contains("Keywords.ForbiddenNamesAsDeclared.objectFound"));
        assert!(out.contains("namespace App\\Object;"));
        assert!(out.contains("declaration of 'Object'"));
        assert!(out.contains("src/App.php"));
    }

    #[test]
    fn summary_lists_files_and_totals() {
        let out = render_summary(&violations(), 3);
        assert!(out.starts_with("FILE"));
        assert!(out.contains("src/App.php"));
        assert!(out.ends_with("1 error(s), 1 warning(s) in 1 of 3 file(s)\n"));
    }

    #[test]
    fn json_is_an_array_of_violations() {
        let parsed: serde_json::Value = serde_json::from_str(&render_json(&violations())).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["severity"], "error");
        assert_eq!(items[0]["word"], "Object");
        assert_eq!(items[0]["line"], 2);
        assert_eq!(items[1]["code"], "mixedFound");
        assert_eq!(items[1]["declaration"], "class");
    }

    #[test]
    fn empty_json_report() {
        assert_eq!(render_json(&[]), "[]");
    }
}
