//! Minimal tokenizer for PHP source files
//!
//! Handles just enough of PHP to find declaration heads reliably:
//! - Inline HTML and open/close tags (`<?php`, `<?=`, `<?`, `?>`)
//! - Keywords from the `phpcompat_core` registry and literal keywords (`null`, `true`, `false`), case-insensitively
//! - Identifiers, variables and namespace separators
//! - Strings, heredocs and comments, so that their contents never produce tokens
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - Quoted string, heredoc/nowdoc and comment scanning
//!
//! ## Notes
//!
//! - Keywords directly after `::`, `->`, `?->`, `function` or `const` are member names, not keywords, and are
//!   emitted as `Ident` (PHP_CodeSniffer does the same retokenization). `Foo::class` therefore never looks like a
//!   class declaration.

mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use crate::diagnostics::LexError;
use phpcompat_core::lang::keywords::{self, KeywordId};
use phpcompat_core::lang::literals;

/// Tokenizer for PHP source code.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    /// `false` while inside inline HTML.
    in_php: bool,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            in_php: false,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<LexError>> {
        while !self.is_at_end() {
            if self.in_php {
                self.scan_token();
            } else {
                self.scan_inline_html();
            }
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, "", Span::new(self.pos, self.pos)));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_str(&mut self, expected: &str) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        let text = &self.source[start..self.pos];
        self.tokens.push(Token::new(kind, text, Span::new(start, self.pos)));
    }

    // ========================================================================
    // Inline HTML
    // ========================================================================

    fn scan_inline_html(&mut self) {
        let start = self.pos;
        let Some(offset) = find_open_tag(self.rest()) else {
            self.pos = self.source.len();
            self.add_token(TokenKind::InlineHtml, start);
            return;
        };

        if offset > 0 {
            self.pos += offset;
            self.add_token(TokenKind::InlineHtml, start);
        }

        let tag_start = self.pos;
        self.pos += open_tag_len(self.rest());
        self.add_token(TokenKind::OpenTag, tag_start);
        self.in_php = true;
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }

        let start = self.pos;

        if self.match_str("?>") {
            self.add_token(TokenKind::CloseTag, start);
            // A single newline directly after the close tag belongs to it.
            if !self.match_str("\r\n") {
                self.match_char('\n');
            }
            self.in_php = false;
            return;
        }

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '#' => {
                if self.match_char('[') {
                    self.add_token(TokenKind::AttributeStart, start);
                } else {
                    self.skip_line_comment();
                }
            }
            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else if self.match_char('*') {
                    self.skip_block_comment(start);
                } else {
                    self.add_token(TokenKind::Punct('/'), start);
                }
            }
            '$' => {
                if self.peek().is_some_and(is_ident_start) {
                    self.consume_ident_tail();
                    self.add_token(TokenKind::Variable, start);
                } else {
                    self.add_token(TokenKind::Punct('$'), start);
                }
            }
            '\\' => self.add_token(TokenKind::NsSeparator, start),
            ':' => {
                if self.match_char(':') {
                    self.add_token(TokenKind::DoubleColon, start);
                } else {
                    self.add_token(TokenKind::Punct(':'), start);
                }
            }
            '-' => {
                if self.match_char('>') {
                    self.add_token(TokenKind::ObjectOperator, start);
                } else {
                    self.add_token(TokenKind::Punct('-'), start);
                }
            }
            '?' => {
                if self.match_str("->") {
                    self.add_token(TokenKind::ObjectOperator, start);
                } else {
                    self.add_token(TokenKind::Punct('?'), start);
                }
            }
            '\'' | '"' | '`' => self.scan_quoted(start, c),
            '<' if self.rest().starts_with("<<") => self.scan_heredoc(start),
            '0'..='9' => self.scan_number(start),
            _ if is_ident_start(c) => self.scan_word(start),
            _ => self.add_token(TokenKind::Punct(c), start),
        }
    }

    // ========================================================================
    // Words
    // ========================================================================

    fn consume_ident_tail(&mut self) {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }
    }

    fn scan_word(&mut self, start: usize) {
        self.consume_ident_tail();
        let text = &self.source[start..self.pos];

        let kind = if self.in_member_position() {
            TokenKind::Ident
        } else if let Some(id) = literals::from_str(text) {
            TokenKind::Literal(id)
        } else if let Some(id) = keywords::from_str(text) {
            TokenKind::Keyword(id)
        } else {
            TokenKind::Ident
        };

        self.add_token(kind, start);
    }

    /// Whether the next word names a member (`Foo::class`, `$a->trait`, `function null()`, `const TRUE`).
    fn in_member_position(&self) -> bool {
        self.tokens.last().is_some_and(|tok| {
            matches!(
                tok.kind,
                TokenKind::DoubleColon
                    | TokenKind::ObjectOperator
                    | TokenKind::Keyword(KeywordId::Function)
                    | TokenKind::Keyword(KeywordId::Const)
            )
        })
    }

    fn scan_number(&mut self, start: usize) {
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_alphanumeric() || c == '_' => {
                    self.advance();
                }
                Some('.') if self.rest()[1..].starts_with(|d: char| d.is_ascii_digit()) => {
                    self.advance();
                }
                _ => break,
            }
        }
        self.add_token(TokenKind::Number, start);
    }
}

/// Byte offset of the next PHP open tag in `html`, if any.
fn find_open_tag(html: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(found) = html[from..].find("<?") {
        let at = from + found;
        if open_tag_len(&html[at..]) > 0 {
            return Some(at);
        }
        from = at + 2;
    }
    None
}

/// Length of the open tag at the start of `s`, or 0 when `s` does not start with one.
fn open_tag_len(s: &str) -> usize {
    let long_tag = s.get(..5).is_some_and(|tag| tag.eq_ignore_ascii_case("<?php"));
    if long_tag && s[5..].chars().next().is_none_or(char::is_whitespace) {
        return 5;
    }
    if s.starts_with("<?=") {
        return 3;
    }
    if s.starts_with("<?") && s[2..].chars().next().is_none_or(char::is_whitespace) {
        return 2;
    }
    0
}

/// Check if a character can start an identifier (PHP allows any non-ASCII byte).
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Check if a character can continue an identifier.
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
