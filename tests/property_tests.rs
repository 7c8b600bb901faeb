//! Property-based tests for phpcompat
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use phpcompat::sniffs::forbidden_names::ForbiddenNamesAsDeclared;
use phpcompat::syntax::ast::{Declaration, DeclarationOpener, DeclaredName, Span};
use phpcompat::{Scanner, Severity, Sniff, SniffRegistry};
use phpcompat_core::lang::reserved::{FORBIDDEN_NAMES, ReservedTables, SOFT_RESERVED_NAMES};
use phpcompat_core::{PhpVersion, TestVersion};
use proptest::prelude::*;

fn class_named(name: &str) -> Declaration {
    Declaration::Type {
        opener: DeclarationOpener::Class,
        name: Some(DeclaredName {
            text: name.to_string(),
            span: Span::new(6, 6 + name.len()),
            literal: None,
        }),
        span: Span::new(0, 5),
    }
}

fn version() -> impl Strategy<Value = PhpVersion> {
    (5u16..=8, 0u16..=4).prop_map(|(major, minor)| PhpVersion::new(major, minor))
}

fn test_version() -> impl Strategy<Value = TestVersion> {
    prop_oneof![
        Just(TestVersion::any()),
        version().prop_map(TestVersion::exactly),
        (version(), version()).prop_map(|(a, b)| TestVersion::range(Some(a.min(b)), Some(a.max(b))).unwrap()),
        version().prop_map(|v| TestVersion::range(Some(v), None).unwrap()),
        version().prop_map(|v| TestVersion::range(None, Some(v)).unwrap()),
    ]
}

fn reserved_word() -> impl Strategy<Value = &'static str> {
    let words: Vec<&'static str> = FORBIDDEN_NAMES
        .iter()
        .chain(SOFT_RESERVED_NAMES)
        .map(|entry| entry.word)
        .collect();
    prop::sample::select(words)
}

/// Randomly flip the case of each character.
fn case_variant(word: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), word.len()).prop_map(move |flips| {
        word.chars()
            .zip(flips)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

// =============================================================================
// Test version properties
// =============================================================================

proptest! {
    /// Property: displaying a test version and parsing it back yields the same range
    #[test]
    fn test_version_display_parses_back(tv in test_version()) {
        let shown = tv.to_string();
        let reparsed: TestVersion = if shown == "any" { TestVersion::any() } else { shown.parse().unwrap() };
        prop_assert_eq!(reparsed, tv);
    }

    /// Property: `supports_above` is monotone; supporting a version implies supporting every older one
    #[test]
    fn supports_above_is_monotone(tv in test_version(), a in version(), b in version()) {
        let (older, newer) = (a.min(b), a.max(b));
        if tv.supports_above(newer) {
            prop_assert!(tv.supports_above(older));
        }
    }
}

// =============================================================================
// Sniff properties
// =============================================================================

proptest! {
    /// Property: names outside both tables are never flagged
    #[test]
    fn unreserved_names_are_never_flagged(name in "[A-Za-z_][A-Za-z0-9_]{0,12}", tv in test_version()) {
        let tables = ReservedTables::shared();
        let lc = name.to_ascii_lowercase();
        prop_assume!(!tables.forbidden.contains(&lc) && !tables.soft_reserved.contains(&lc));

        let sniff = ForbiddenNamesAsDeclared::new();
        prop_assert!(sniff.evaluate(&class_named(&name), &tv).is_none());
    }

    /// Property: evaluation does not depend on letter case, apart from the quoted name
    #[test]
    fn case_variants_are_treated_alike(
        (word, variant) in reserved_word().prop_flat_map(|w| (Just(w), case_variant(w))),
        tv in test_version(),
    ) {
        let sniff = ForbiddenNamesAsDeclared::new();
        let lower = sniff.evaluate(&class_named(word), &tv);
        let mixed = sniff.evaluate(&class_named(&variant), &tv);

        prop_assert_eq!(lower.is_some(), mixed.is_some());
        if let (Some(lower), Some(mixed)) = (lower, mixed) {
            prop_assert_eq!(lower.severity, mixed.severity);
            prop_assert_eq!(lower.code, mixed.code);
            prop_assert_eq!(mixed.matched_word, variant);
        }
    }

    /// Property: a reserved word is reported iff some entry for it is in effect for the test version, and it is an
    /// error iff a hard entry is in effect
    #[test]
    fn flagged_iff_threshold_covered(word in reserved_word(), tv in test_version()) {
        let tables = ReservedTables::shared();
        let gate = tv.supports_above(PhpVersion::new(7, 0));
        let hard = gate && tables.forbidden.get(word).is_some_and(|e| tv.supports_above(e.since));
        let soft = gate && tables.soft_reserved.get(word).is_some_and(|e| tv.supports_above(e.since));

        let result = ForbiddenNamesAsDeclared::new().evaluate(&class_named(word), &tv);
        prop_assert_eq!(result.is_some(), hard || soft);
        if let Some(diagnostic) = result {
            let expected = if hard { Severity::Error } else { Severity::Warning };
            prop_assert_eq!(diagnostic.severity, expected);
            prop_assert_eq!(diagnostic.code, format!("{word}Found"));
        }
    }

    /// Property: scanning is deterministic; the same file yields the same violations
    #[test]
    fn scanning_is_idempotent(word in reserved_word(), tv in test_version()) {
        let source = format!("<?php\nnamespace App\\{word};\nclass {word} {{}}\ninterface {word}Like {{}}\n");
        let registry = SniffRegistry::with_defaults();
        let scanner = Scanner::new(&registry, tv);

        let mut first = Vec::new();
        let mut second = Vec::new();
        scanner.scan("a.php", &source, &mut first).unwrap();
        scanner.scan("a.php", &source, &mut second).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.len() <= 2);
    }
}
