//! Diagnostics produced by sniffs and the sink they are emitted through.
//!
//! A sniff returns a [`Diagnostic`] describing *what* is wrong. The scanner attaches *where* (file, span,
//! line/column) and hands the resulting [`Violation`] to a [`DiagnosticSink`]. Sniffs never render or store
//! diagnostics themselves.

use std::fmt;

use crate::syntax::ast::Span;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finding reported by a sniff for one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable error code, e.g. `objectFound`.
    pub code: String,
    pub message: String,
    /// The offending word, as spelled in the source.
    pub matched_word: String,
    /// Keyword of the declaration the word was found in (`class`, `namespace`, ...).
    pub declaration_kind: &'static str,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// A diagnostic located in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    /// Span of the token the sniff was triggered on.
    pub span: Span,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, in characters.
    pub column: usize,
    /// Code of the sniff that produced the diagnostic, e.g. `Keywords.ForbiddenNamesAsDeclared`.
    pub sniff: &'static str,
    pub diagnostic: Diagnostic,
}

impl Violation {
    /// Fully qualified code: `<sniff>.<code>`.
    pub fn full_code(&self) -> String {
        format!("{}.{}", self.sniff, self.diagnostic.code)
    }

    pub fn severity(&self) -> Severity {
        self.diagnostic.severity
    }
}

/// Receiver for located diagnostics.
pub trait DiagnosticSink {
    fn add_message(&mut self, violation: Violation);
}

impl DiagnosticSink for Vec<Violation> {
    fn add_message(&mut self, violation: Violation) {
        self.push(violation);
    }
}

/// Get 1-based line and column numbers for a byte offset
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut column = 1;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(severity: Severity) -> Violation {
        Violation {
            path: "src/Foo.php".to_string(),
            span: Span::new(6, 11),
            line: 1,
            column: 7,
            sniff: "Keywords.ForbiddenNamesAsDeclared",
            diagnostic: Diagnostic {
                severity,
                code: "voidFound".to_string(),
                message: "msg".to_string(),
                matched_word: "Void".to_string(),
                declaration_kind: "class",
            },
        }
    }

    #[test]
    fn full_code_joins_sniff_and_code() {
        assert_eq!(sample(Severity::Error).full_code(), "Keywords.ForbiddenNamesAsDeclared.voidFound");
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<Violation> = Vec::new();
        sink.add_message(sample(Severity::Warning));
        sink.add_message(sample(Severity::Error));
        assert_eq!(sink.len(), 2);
        assert!(!sink[0].diagnostic.is_error());
        assert!(sink[1].diagnostic.is_error());
    }

    #[test]
    fn line_col_counts_from_one() {
        let source = "<?php\n\nclass Foo {}";
        assert_eq!(line_col(source, 0), (1, 1));
        assert_eq!(line_col(source, 7), (3, 1));
        assert_eq!(line_col(source, 13), (3, 7));
        assert_eq!(line_col(source, 999), (3, 13));
    }
}
