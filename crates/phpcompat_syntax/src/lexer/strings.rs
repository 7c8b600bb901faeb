//! String, heredoc/nowdoc and comment scanning.
//!
//! None of these constructs produce name tokens; they only need to be skipped accurately so that words inside them
//! are never mistaken for declarations.

use super::{Lexer, TokenKind, is_ident_continue, is_ident_start};
use crate::ast::Span;
use crate::diagnostics::{LexError, source_span};

impl Lexer<'_> {
    /// Skip a `//` or `#` comment. The comment ends at a newline or right before `?>`.
    pub(super) fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' || self.rest().starts_with("?>") {
                break;
            }
            self.advance();
        }
    }

    /// Skip a `/* ... */` comment whose opener started at `start`.
    pub(super) fn skip_block_comment(&mut self, start: usize) {
        match self.rest().find("*/") {
            Some(end) => self.pos += end + 2,
            None => {
                self.errors.push(LexError::UnterminatedComment {
                    at: source_span(Span::new(start, start + 2)),
                });
                self.pos = self.source.len();
            }
        }
    }

    /// Scan a `'...'`, `"..."` or `` `...` `` string. The opening quote is already consumed.
    pub(super) fn scan_quoted(&mut self, start: usize, quote: char) {
        loop {
            match self.advance() {
                None => {
                    self.errors.push(LexError::UnterminatedString {
                        at: source_span(Span::new(start, start + 1)),
                    });
                    return;
                }
                Some('\\') => {
                    self.advance();
                }
                Some(c) if c == quote => break,
                Some(_) => {}
            }
        }
        self.add_token(TokenKind::String, start);
    }

    /// Scan a heredoc or nowdoc. `start` points at the first `<`; one `<` is already consumed.
    ///
    /// The closing identifier may be indented (PHP 7.3 flexible heredoc) and must not be followed by an identifier
    /// character.
    pub(super) fn scan_heredoc(&mut self, start: usize) {
        let Some(label) = self.heredoc_label(start) else {
            // Not a heredoc after all: `<<<` without a label.
            self.pos = start + 1;
            self.add_token(TokenKind::Punct('<'), start);
            return;
        };

        let len = self.source.len();
        let Some(newline) = self.rest().find('\n') else {
            self.unterminated_heredoc(start, label);
            return;
        };

        let mut line_start = self.pos + newline + 1;
        while line_start <= len {
            let line_end = self.source[line_start..]
                .find('\n')
                .map(|i| line_start + i)
                .unwrap_or(len);
            let line = &self.source[line_start..line_end];
            let trimmed = line.trim_start_matches(|c| c == ' ' || c == '\t');

            if let Some(after) = trimmed.strip_prefix(label.as_str()) {
                if !after.chars().next().is_some_and(is_ident_continue) {
                    self.pos = line_start + (line.len() - trimmed.len()) + label.len();
                    self.add_token(TokenKind::String, start);
                    return;
                }
            }

            line_start = line_end + 1;
        }

        self.unterminated_heredoc(start, label);
    }

    /// Read `<<ID`, `<<"ID"` or `<<'ID'` (the first `<` is already consumed). Returns `None` and leaves the
    /// position untouched when no label follows.
    fn heredoc_label(&mut self, start: usize) -> Option<String> {
        let rest = self.rest().strip_prefix("<<")?;
        let rest = rest.trim_start_matches(|c| c == ' ' || c == '\t');
        let (quote, rest) = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => (Some(q), &rest[1..]),
            _ => (None, rest),
        };

        if !rest.chars().next().is_some_and(is_ident_start) {
            return None;
        }
        let label_len = rest.find(|c: char| !is_ident_continue(c)).unwrap_or(rest.len());
        let label = &rest[..label_len];
        let mut after = &rest[label_len..];

        if let Some(q) = quote {
            after = after.strip_prefix(q)?;
        }

        let consumed = self.source.len() - after.len();
        debug_assert!(consumed > start);
        self.pos = consumed;
        Some(label.to_string())
    }

    fn unterminated_heredoc(&mut self, start: usize, label: String) {
        self.errors.push(LexError::UnterminatedHeredoc {
            delimiter: label,
            at: source_span(Span::new(start, start + 3)),
        });
        self.pos = self.source.len();
    }
}
