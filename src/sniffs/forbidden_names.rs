//! Detect reserved keywords used to name a class, interface, trait or namespace.
//!
//! Reserved words (`int`, `void`, `object`, ...) produce an error once the `testVersion` reaches the PHP version
//! that reserved them. Soft-reserved words (`resource`, `mixed`, ...) produce a warning. A word that is both, for a
//! test version covering both thresholds, produces a single error naming both versions.
//!
//! ## Notes
//! - Matching is case-insensitive; messages quote the name as written.
//! - Only the first offending segment of a namespace name is reported.
//! - Class-like names lexed as literal tokens (`null`, `true`, `false`) are checked against the literal registry
//!   first, by token identity. Identifier text is checked against the word tables independently.
//!
//! ## See also
//! - <https://www.php.net/manual/en/reserved.other-reserved-words.php>
//! - <https://wiki.php.net/rfc/reserve_more_types_in_php_7>

use std::collections::HashSet;

use phpcompat_core::TestVersion;
use phpcompat_core::lang::reserved::{self, RULE_BASELINE, ReservedTables};
use phpcompat_syntax::ast::{Declaration, DeclarationOpener};

use super::Sniff;
use crate::diagnostics::{Diagnostic, Severity};

const TARGETS: &[DeclarationOpener] = &[
    DeclarationOpener::Class,
    DeclarationOpener::Interface,
    DeclarationOpener::Trait,
    DeclarationOpener::Namespace,
];

/// The `Keywords.ForbiddenNamesAsDeclared` sniff.
#[derive(Debug)]
pub struct ForbiddenNamesAsDeclared {
    tables: &'static ReservedTables,
    /// Union of both identifier tables, for the quick "is this reserved at all" test.
    all_reserved: HashSet<&'static str>,
}

impl Default for ForbiddenNamesAsDeclared {
    fn default() -> Self {
        Self::new()
    }
}

impl ForbiddenNamesAsDeclared {
    pub const CODE: &'static str = "Keywords.ForbiddenNamesAsDeclared";

    pub fn new() -> Self {
        let tables = ReservedTables::shared();
        let all_reserved = tables.forbidden.words().chain(tables.soft_reserved.words()).collect();
        Self { tables, all_reserved }
    }

    fn is_reserved(&self, word: &str) -> bool {
        self.all_reserved.contains(word.to_ascii_lowercase().as_str())
    }

    /// The name to check: the declared name of a class-like declaration, or the first reserved segment of a
    /// namespace name.
    fn resolve_name<'d>(&self, declaration: &'d Declaration) -> Option<&'d str> {
        match declaration {
            Declaration::Type { name, .. } => {
                let name = name.as_ref()?.text.as_str();
                (!name.is_empty() && self.is_reserved(name)).then_some(name)
            }
            Declaration::Namespace { .. } => declaration
                .namespace_segments()
                .into_iter()
                .find(|segment| self.is_reserved(segment)),
        }
    }

    /// `class NULL {}`: a class-like name the tokenizer produced as a literal token.
    fn check_literal_name(&self, declaration: &Declaration, test_version: &TestVersion) -> Option<Diagnostic> {
        let Declaration::Type {
            opener,
            name: Some(name),
            ..
        } = declaration
        else {
            return None;
        };
        if !opener.is_oo_scope() {
            return None;
        }

        let entry = reserved::forbidden_literal(name.literal?)?;
        if !test_version.supports_above(entry.since) {
            return None;
        }

        let clause = format!("reserved keyword as of PHP version {}", entry.since);
        Some(build_diagnostic(Severity::Error, &name.text, &clause, *opener))
    }
}

impl Sniff for ForbiddenNamesAsDeclared {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn register(&self) -> &'static [DeclarationOpener] {
        TARGETS
    }

    fn evaluate(&self, declaration: &Declaration, test_version: &TestVersion) -> Option<Diagnostic> {
        if !TARGETS.contains(&declaration.opener()) || !test_version.supports_above(RULE_BASELINE) {
            return None;
        }

        if let Some(diagnostic) = self.check_literal_name(declaration, test_version) {
            return Some(diagnostic);
        }

        let name = self.resolve_name(declaration)?;
        let name_lc = name.to_ascii_lowercase();

        let soft = self
            .tables
            .soft_reserved
            .get(&name_lc)
            .filter(|entry| test_version.supports_above(entry.since));
        let hard = self
            .tables
            .forbidden
            .get(&name_lc)
            .filter(|entry| test_version.supports_above(entry.since));

        let (severity, clause) = match (soft, hard) {
            (None, None) => {
                tracing::debug!(name, %test_version, "reserved word not in effect for testVersion");
                return None;
            }
            (Some(soft), None) => (
                Severity::Warning,
                format!("soft reserved keyword as of PHP version {}", soft.since),
            ),
            (None, Some(hard)) => (
                Severity::Error,
                format!("reserved keyword as of PHP version {}", hard.since),
            ),
            (Some(soft), Some(hard)) => (
                Severity::Error,
                format!(
                    "soft reserved keyword as of PHP version {} and a reserved keyword as of PHP version {}",
                    soft.since, hard.since
                ),
            ),
        };

        Some(build_diagnostic(severity, name, &clause, declaration.opener()))
    }
}

fn build_diagnostic(severity: Severity, name: &str, clause: &str, opener: DeclarationOpener) -> Diagnostic {
    let kind = opener.label();
    Diagnostic {
        severity,
        code: error_code(name),
        message: format!(
            "'{name}' is a {clause} and should not be used to name a class, interface or trait or as part of a \
             namespace ({kind})"
        ),
        matched_word: name.to_string(),
        declaration_kind: kind,
    }
}

/// `<word>Found`, with the word lower-cased and anything outside `[a-z0-9_]` replaced by `_`.
pub fn error_code(word: &str) -> String {
    let mut code: String = word
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' }
        })
        .collect();
    code.push_str("Found");
    code
}
