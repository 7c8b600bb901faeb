//! PHP keywords that the tokenizer needs to recognise to locate declarations.
//!
//! Only the subset relevant to declaration heads is registered. Every other word is lexed as a plain identifier.
//!
//! ## Examples
//! ```rust
//! use phpcompat_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("CLASS"), Some(KeywordId::Class));
//! assert_eq!(keywords::as_str(KeywordId::Namespace), "namespace");
//! ```

/// Stable identifier for every registered keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // OO scope openers
    Class,
    Interface,
    Trait,
    Enum,

    // Scoping
    Namespace,
    Use,
    Function,
    Const,

    // Declaration modifiers / clauses
    New,
    Extends,
    Implements,
    Abstract,
    Final,
    Readonly,
}

/// High-level grouping for tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Opens a class-like scope (`class`, `interface`, `trait`, `enum`).
    OoScope,
    Scoping,
    Modifier,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Class, "class", KeywordCategory::OoScope),
    info(KeywordId::Interface, "interface", KeywordCategory::OoScope),
    info(KeywordId::Trait, "trait", KeywordCategory::OoScope),
    info(KeywordId::Enum, "enum", KeywordCategory::OoScope),
    info(KeywordId::Namespace, "namespace", KeywordCategory::Scoping),
    info(KeywordId::Use, "use", KeywordCategory::Scoping),
    info(KeywordId::Function, "function", KeywordCategory::Scoping),
    info(KeywordId::Const, "const", KeywordCategory::Scoping),
    info(KeywordId::New, "new", KeywordCategory::Modifier),
    info(KeywordId::Extends, "extends", KeywordCategory::Modifier),
    info(KeywordId::Implements, "implements", KeywordCategory::Modifier),
    info(KeywordId::Abstract, "abstract", KeywordCategory::Modifier),
    info(KeywordId::Final, "final", KeywordCategory::Modifier),
    info(KeywordId::Readonly, "readonly", KeywordCategory::Modifier),
];

/// Canonical (lower-case) spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Metadata for `id`.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a KEYWORDS entry")
}

/// Resolve a spelling to a keyword id, ignoring ASCII case.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical.eq_ignore_ascii_case(s)).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
