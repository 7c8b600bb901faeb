//! Provide the shared, pure vocabulary used by the phpcompat checker.
//!
//! It contains the data that both the tokenizer and the
//! compatibility sniffs need to agree on:
//! - PHP versions and the `testVersion` constraint the analysis runs under, and
//! - canonical PHP vocabulary (declaration keywords, literal keywords, reserved type names).
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global mutable state, and no syntax-tree types.
//! - Registries are `const` tables; lookup maps derived from them are built once and only read afterwards.

pub mod lang;
pub mod version;

pub use version::{PhpVersion, TestVersion, VersionError};
