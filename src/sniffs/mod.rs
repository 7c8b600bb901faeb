//! Sniff interface and the dispatch table that routes declarations to sniffs.
//!
//! ## Design
//!
//! A sniff declares which declaration openers it listens for ([`Sniff::register`]) and evaluates one
//! [`Declaration`] at a time ([`Sniff::evaluate`]). The caller-owned [`SniffRegistry`] indexes sniffs by opener so
//! the scanner only builds declarations somebody is interested in.
//!
//! ## Modules
//!
//! - `forbidden_names` - reserved words used as class, interface, trait or namespace names

pub mod forbidden_names;

use std::collections::HashMap;

use phpcompat_core::TestVersion;
use phpcompat_syntax::ast::{Declaration, DeclarationOpener};

use crate::diagnostics::Diagnostic;

pub use forbidden_names::ForbiddenNamesAsDeclared;

/// A compatibility check over declarations.
///
/// Implementations must be pure: the same declaration and test version always yield the same result, and nothing
/// is mutated during evaluation.
pub trait Sniff: Send + Sync {
    /// Stable sniff code, e.g. `Keywords.ForbiddenNamesAsDeclared`.
    fn code(&self) -> &'static str;

    /// Declaration openers this sniff wants to see.
    fn register(&self) -> &'static [DeclarationOpener];

    /// Check one declaration under `test_version`.
    fn evaluate(&self, declaration: &Declaration, test_version: &TestVersion) -> Option<Diagnostic>;
}

/// Registered sniffs, indexed by the openers they listen for.
#[derive(Default)]
pub struct SniffRegistry {
    sniffs: Vec<Box<dyn Sniff>>,
    by_opener: HashMap<DeclarationOpener, Vec<usize>>,
}

impl SniffRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in sniff.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ForbiddenNamesAsDeclared::new()));
        registry
    }

    pub fn register(&mut self, sniff: Box<dyn Sniff>) {
        let index = self.sniffs.len();
        for &opener in sniff.register() {
            self.by_opener.entry(opener).or_default().push(index);
        }
        tracing::debug!(sniff = sniff.code(), "registered sniff");
        self.sniffs.push(sniff);
    }

    /// Sniffs listening for `opener`, in registration order.
    pub fn sniffs_for(&self, opener: DeclarationOpener) -> impl Iterator<Item = &dyn Sniff> + '_ {
        self.by_opener
            .get(&opener)
            .into_iter()
            .flatten()
            .map(move |&index| self.sniffs[index].as_ref())
    }

    pub fn listens_to(&self, opener: DeclarationOpener) -> bool {
        self.by_opener.contains_key(&opener)
    }

    pub fn len(&self) -> usize {
        self.sniffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sniffs.is_empty()
    }
}

impl std::fmt::Debug for SniffRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SniffRegistry")
            .field("sniffs", &self.sniffs.iter().map(|s| s.code()).collect::<Vec<_>>())
            .finish()
    }
}
