//! Token types for the PHP tokenizer.
//!
//! Tokens carry their source spelling, like PHP_CodeSniffer's `content`, so that declared names keep their
//! original case.
//!
//! ## Notes
//! - Keyword and literal tokens carry stable IDs from `phpcompat_core::lang`.
//! - Whitespace and comments are not emitted.

use crate::ast::Span;
use phpcompat_core::lang::keywords::KeywordId;
use phpcompat_core::lang::literals::LiteralId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Vocabulary (ID-based) ==========
    Keyword(KeywordId),
    /// `null`, `true`, `false` in any case.
    Literal(LiteralId),

    // ========== Names and values ==========
    Ident,
    Variable,
    Number,
    /// Quoted string, heredoc or nowdoc, including delimiters.
    String,

    // ========== Punctuation ==========
    /// `\`
    NsSeparator,
    /// `::`
    DoubleColon,
    /// `->` or `?->`
    ObjectOperator,
    /// `#[`
    AttributeStart,
    Punct(char),

    // ========== Embedding ==========
    OpenTag,
    CloseTag,
    InlineHtml,

    Eof,
}

/// A token with its kind, source spelling and span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}
