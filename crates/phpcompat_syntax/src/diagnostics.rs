//! Tokenizer errors.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

/// A construct the tokenizer could not close before end of input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    #[error("unterminated string literal")]
    #[diagnostic(code(phpcompat::lex::unterminated_string))]
    UnterminatedString {
        #[label("string starts here")]
        at: SourceSpan,
    },

    #[error("unterminated comment")]
    #[diagnostic(code(phpcompat::lex::unterminated_comment))]
    UnterminatedComment {
        #[label("comment starts here")]
        at: SourceSpan,
    },

    #[error("unterminated heredoc, expected closing identifier '{delimiter}'")]
    #[diagnostic(code(phpcompat::lex::unterminated_heredoc))]
    UnterminatedHeredoc {
        delimiter: String,
        #[label("heredoc starts here")]
        at: SourceSpan,
    },
}

impl LexError {
    pub fn span(&self) -> Span {
        let at = match self {
            LexError::UnterminatedString { at }
            | LexError::UnterminatedComment { at }
            | LexError::UnterminatedHeredoc { at, .. } => at,
        };
        Span::new(at.offset(), at.offset() + at.len())
    }
}

pub(crate) fn source_span(span: Span) -> SourceSpan {
    SourceSpan::from(span.start..span.end)
}
