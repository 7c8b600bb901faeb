//! Small helper APIs for working with `Token` / `TokenKind`.

use crate::lexer::{Token, TokenKind};
use phpcompat_core::lang::keywords::KeywordId;
use phpcompat_core::lang::literals::LiteralId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the literal id, if this is a literal token.
    pub fn literal_id(&self) -> Option<LiteralId> {
        match self {
            TokenKind::Literal(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation character.
    pub fn is_punct(&self, c: char) -> bool {
        matches!(self, TokenKind::Punct(p) if *p == c)
    }

    /// Return `true` for tokens that can be part of a (possibly qualified) name.
    pub fn is_name_part(&self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Literal(_) | TokenKind::Keyword(_))
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.literal_id()`.
    pub fn literal_id(&self) -> Option<LiteralId> {
        self.kind.literal_id()
    }
}
