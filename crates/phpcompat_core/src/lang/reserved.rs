//! Words PHP reserves (or soft-reserves) for its own type system.
//!
//! Three registries, each entry tagged with the PHP version in which the restriction took effect:
//!
//! - [`FORBIDDEN_LITERALS`]: literal *tokens* (`null`, `true`, `false`) which cannot name a class-like
//!   declaration. Matched by token identity.
//! - [`FORBIDDEN_NAMES`]: identifier text that is a reserved word (an error to use as a declared name).
//! - [`SOFT_RESERVED_NAMES`]: identifier text that is discouraged because PHP may reserve it later.
//!
//! A word may appear in both identifier registries (`object` was soft-reserved in 7.0 and reserved in 7.2).
//!
//! ## See also
//! - <https://www.php.net/manual/en/reserved.other-reserved-words.php>
//! - <https://wiki.php.net/rfc/reserve_more_types_in_php_7>

use std::collections::HashMap;
use std::sync::LazyLock;

use super::literals::LiteralId;
use crate::version::PhpVersion;

/// Oldest PHP version any of these restrictions apply to.
pub const RULE_BASELINE: PhpVersion = PhpVersion::new(7, 0);

/// One reserved or soft-reserved word. `word` is always lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedWord {
    pub word: &'static str,
    pub since: PhpVersion,
}

/// A literal token which cannot be used as a class, interface or trait name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForbiddenLiteral {
    pub id: LiteralId,
    pub since: PhpVersion,
}

pub const FORBIDDEN_LITERALS: &[ForbiddenLiteral] = &[
    literal(LiteralId::Null, 7, 0),
    literal(LiteralId::True, 7, 0),
    literal(LiteralId::False, 7, 0),
];

pub const FORBIDDEN_NAMES: &[ReservedWord] = &[
    word("null", 7, 0),
    word("true", 7, 0),
    word("false", 7, 0),
    word("bool", 7, 0),
    word("int", 7, 0),
    word("float", 7, 0),
    word("string", 7, 0),
    word("iterable", 7, 1),
    word("void", 7, 1),
    word("object", 7, 2),
];

pub const SOFT_RESERVED_NAMES: &[ReservedWord] = &[
    word("resource", 7, 0),
    word("object", 7, 0),
    word("mixed", 7, 0),
    word("numeric", 7, 0),
];

/// Look up the restriction for a literal token.
pub fn forbidden_literal(id: LiteralId) -> Option<&'static ForbiddenLiteral> {
    FORBIDDEN_LITERALS.iter().find(|l| l.id == id)
}

/// Immutable lower-cased word → entry map built from a registry.
///
/// ## Notes
/// - Lookups expect an already lower-cased key; callers fold case once and reuse the folded string.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: HashMap<&'static str, ReservedWord>,
}

impl KeywordTable {
    pub fn from_registry(registry: &[ReservedWord]) -> Self {
        let entries = registry.iter().map(|entry| (entry.word, *entry)).collect();
        Self { entries }
    }

    pub fn get(&self, word_lc: &str) -> Option<&ReservedWord> {
        self.entries.get(word_lc)
    }

    pub fn contains(&self, word_lc: &str) -> bool {
        self.entries.contains_key(word_lc)
    }

    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

/// The two identifier tables, built once per process.
#[derive(Debug)]
pub struct ReservedTables {
    pub forbidden: KeywordTable,
    pub soft_reserved: KeywordTable,
}

static SHARED: LazyLock<ReservedTables> = LazyLock::new(|| ReservedTables {
    forbidden: KeywordTable::from_registry(FORBIDDEN_NAMES),
    soft_reserved: KeywordTable::from_registry(SOFT_RESERVED_NAMES),
});

impl ReservedTables {
    /// Process-wide read-only tables.
    pub fn shared() -> &'static ReservedTables {
        &SHARED
    }
}

const fn word(word: &'static str, major: u16, minor: u16) -> ReservedWord {
    ReservedWord {
        word,
        since: PhpVersion::new(major, minor),
    }
}

const fn literal(id: LiteralId, major: u16, minor: u16) -> ForbiddenLiteral {
    ForbiddenLiteral {
        id,
        since: PhpVersion::new(major, minor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::literals::{self, LITERALS};

    #[test]
    fn registry_words_are_lower_case_and_unique() {
        for registry in [FORBIDDEN_NAMES, SOFT_RESERVED_NAMES] {
            let table = KeywordTable::from_registry(registry);
            assert_eq!(table.words().count(), registry.len(), "duplicate word in registry");
            for entry in registry {
                assert_eq!(entry.word, entry.word.to_ascii_lowercase());
            }
        }
    }

    #[test]
    fn object_is_both_soft_reserved_and_reserved() {
        let tables = ReservedTables::shared();
        assert_eq!(tables.soft_reserved.get("object").map(|e| e.since), Some(PhpVersion::new(7, 0)));
        assert_eq!(tables.forbidden.get("object").map(|e| e.since), Some(PhpVersion::new(7, 2)));
    }

    #[test]
    fn every_literal_is_forbidden_and_also_listed_as_text() {
        let tables = ReservedTables::shared();
        for &id in LITERALS {
            let entry = forbidden_literal(id).expect("literal missing from FORBIDDEN_LITERALS");
            assert_eq!(entry.since, RULE_BASELINE);
            assert!(tables.forbidden.contains(literals::as_str(id)));
        }
    }

    #[test]
    fn no_restriction_predates_the_baseline() {
        let all = FORBIDDEN_NAMES.iter().chain(SOFT_RESERVED_NAMES);
        assert!(all.map(|e| e.since).all(|since| since >= RULE_BASELINE));
    }

    #[test]
    fn lookups_are_by_lower_case_key() {
        let tables = ReservedTables::shared();
        assert!(tables.forbidden.contains("void"));
        assert!(!tables.forbidden.contains("Void"));
        assert!(tables.forbidden.get("resource").is_none());
    }
}
