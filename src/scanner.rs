//! Walk a file's token stream and drive registered sniffs.
//!
//! The scanner owns no state between files: it borrows a [`SniffRegistry`], holds the active [`TestVersion`], and
//! forwards every diagnostic a sniff produces to the caller's [`DiagnosticSink`].

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use phpcompat_core::TestVersion;
use phpcompat_syntax::ast::DeclarationOpener;
use phpcompat_syntax::declarations;
use phpcompat_syntax::diagnostics::LexError;
use phpcompat_syntax::lexer;

use crate::diagnostics::{DiagnosticSink, Violation, line_col};
use crate::sniffs::SniffRegistry;

/// A file that could not be scanned.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ScanError {
    #[error("could not tokenize {path}")]
    #[diagnostic(code(phpcompat::scan::lex))]
    Lex {
        path: String,
        #[related]
        errors: Vec<LexError>,
    },
}

/// Drives a [`SniffRegistry`] over source files.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'r> {
    registry: &'r SniffRegistry,
    test_version: TestVersion,
}

impl<'r> Scanner<'r> {
    pub fn new(registry: &'r SniffRegistry, test_version: TestVersion) -> Self {
        Self { registry, test_version }
    }

    /// Scan one file, emitting violations into `sink`.
    ///
    /// Returns the number of violations emitted; an empty registry returns `Ok(0)` without tokenizing. Tokenizer
    /// failures are returned as [`ScanError::Lex`]; the caller decides whether to carry on with other files.
    #[tracing::instrument(skip_all, fields(path = path, source_len = source.len()))]
    pub fn scan(&self, path: &str, source: &str, sink: &mut dyn DiagnosticSink) -> Result<usize, ScanError> {
        if self.registry.is_empty() {
            return Ok(0);
        }

        let tokens = lexer::lex(source).map_err(|errors| ScanError::Lex {
            path: path.to_string(),
            errors,
        })?;

        let mut emitted = 0;
        for (ptr, tok) in tokens.iter().enumerate() {
            let Some(opener) = tok.keyword_id().and_then(DeclarationOpener::from_keyword) else {
                continue;
            };
            if !self.registry.listens_to(opener) {
                continue;
            }
            let Some(declaration) = declarations::declaration_at(&tokens, ptr) else {
                continue;
            };

            for sniff in self.registry.sniffs_for(opener) {
                let Some(diagnostic) = sniff.evaluate(&declaration, &self.test_version) else {
                    continue;
                };
                let span = declaration.span();
                let (line, column) = line_col(source, span.start);
                sink.add_message(Violation {
                    path: path.to_string(),
                    span,
                    line,
                    column,
                    sniff: sniff.code(),
                    diagnostic,
                });
                emitted += 1;
            }
        }

        tracing::debug!(emitted, "scan complete");
        Ok(emitted)
    }
}
