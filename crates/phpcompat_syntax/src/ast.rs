//! Source spans and the declaration nodes handed to sniffs.

use std::fmt;

use phpcompat_core::lang::keywords::{self, KeywordCategory, KeywordId};
use phpcompat_core::lang::literals::LiteralId;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Keyword that opens a declaration a sniff can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationOpener {
    Class,
    Interface,
    Trait,
    Enum,
    Namespace,
}

impl DeclarationOpener {
    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Class => Some(Self::Class),
            KeywordId::Interface => Some(Self::Interface),
            KeywordId::Trait => Some(Self::Trait),
            KeywordId::Enum => Some(Self::Enum),
            KeywordId::Namespace => Some(Self::Namespace),
            _ => None,
        }
    }

    pub fn keyword(self) -> KeywordId {
        match self {
            Self::Class => KeywordId::Class,
            Self::Interface => KeywordId::Interface,
            Self::Trait => KeywordId::Trait,
            Self::Enum => KeywordId::Enum,
            Self::Namespace => KeywordId::Namespace,
        }
    }

    /// Lower-case keyword spelling, used in diagnostics.
    pub fn label(self) -> &'static str {
        keywords::as_str(self.keyword())
    }

    /// `true` for openers of a class-like scope.
    pub fn is_oo_scope(self) -> bool {
        keywords::category(self.keyword()) == KeywordCategory::OoScope
    }
}

impl fmt::Display for DeclarationOpener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name token of a class-like declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredName {
    /// Spelling as written in the source.
    pub text: String,
    pub span: Span,
    /// Set when the tokenizer produced a literal token (`null`/`true`/`false`) for the name.
    pub literal: Option<LiteralId>,
}

/// A declaration located in a token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `class`/`interface`/`trait`/`enum`. `name` is `None` for anonymous classes.
    Type {
        opener: DeclarationOpener,
        name: Option<DeclaredName>,
        span: Span,
    },
    /// `namespace A\B;` or `namespace A\B { ... }`. `name` is empty for the global namespace block.
    Namespace { name: String, span: Span },
}

impl Declaration {
    pub fn opener(&self) -> DeclarationOpener {
        match self {
            Declaration::Type { opener, .. } => *opener,
            Declaration::Namespace { .. } => DeclarationOpener::Namespace,
        }
    }

    /// Span of the opening keyword.
    pub fn span(&self) -> Span {
        match self {
            Declaration::Type { span, .. } | Declaration::Namespace { span, .. } => *span,
        }
    }

    /// `\`-separated segments of a namespace name, in declaration order. Empty for type declarations and for the
    /// global namespace.
    pub fn namespace_segments(&self) -> Vec<&str> {
        match self {
            Declaration::Namespace { name, .. } if !name.is_empty() => name.split('\\').collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_segments_keep_declaration_order() {
        let decl = Declaration::Namespace {
            name: "Vendor\\Package\\Object".to_string(),
            span: Span::new(6, 15),
        };
        assert_eq!(decl.namespace_segments(), vec!["Vendor", "Package", "Object"]);
        assert_eq!(decl.opener(), DeclarationOpener::Namespace);
    }

    #[test]
    fn global_namespace_has_no_segments() {
        let decl = Declaration::Namespace {
            name: String::new(),
            span: Span::default(),
        };
        assert!(decl.namespace_segments().is_empty());
    }

    #[test]
    fn openers_map_from_keywords() {
        assert_eq!(DeclarationOpener::from_keyword(KeywordId::Trait), Some(DeclarationOpener::Trait));
        assert_eq!(DeclarationOpener::from_keyword(KeywordId::Extends), None);
        assert!(DeclarationOpener::Interface.is_oo_scope());
        assert!(DeclarationOpener::Enum.is_oo_scope());
        assert!(!DeclarationOpener::Namespace.is_oo_scope());
    }

    #[test]
    fn labels_are_keyword_spellings() {
        for opener in [
            DeclarationOpener::Class,
            DeclarationOpener::Interface,
            DeclarationOpener::Trait,
            DeclarationOpener::Enum,
            DeclarationOpener::Namespace,
        ] {
            assert_eq!(DeclarationOpener::from_keyword(opener.keyword()), Some(opener));
        }
        assert_eq!(DeclarationOpener::Namespace.label(), "namespace");
        assert_eq!(DeclarationOpener::Interface.to_string(), "interface");
    }
}
