//! PHP literal keywords (`null`, `true`, `false`).
//!
//! The tokenizer produces a dedicated literal token for these words regardless of spelling case, so sniffs can
//! match on token identity instead of text.

/// Stable identifier for a literal keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralId {
    Null,
    True,
    False,
}

/// All literal ids, in registry order.
pub const LITERALS: &[LiteralId] = &[LiteralId::Null, LiteralId::True, LiteralId::False];

/// Canonical (lower-case) spelling.
pub fn as_str(id: LiteralId) -> &'static str {
    match id {
        LiteralId::Null => "null",
        LiteralId::True => "true",
        LiteralId::False => "false",
    }
}

/// Resolve a spelling to a literal id, ignoring ASCII case.
pub fn from_str(s: &str) -> Option<LiteralId> {
    LITERALS.iter().copied().find(|id| as_str(*id).eq_ignore_ascii_case(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_variants_resolve_to_the_same_literal() {
        for spelling in ["null", "NULL", "Null", "nUlL"] {
            assert_eq!(from_str(spelling), Some(LiteralId::Null));
        }
        assert_eq!(from_str("TRUE"), Some(LiteralId::True));
        assert_eq!(from_str("False"), Some(LiteralId::False));
        assert_eq!(from_str("nil"), None);
    }

    #[test]
    fn spellings_round_trip() {
        for &id in LITERALS {
            assert_eq!(from_str(as_str(id)), Some(id));
        }
    }
}
