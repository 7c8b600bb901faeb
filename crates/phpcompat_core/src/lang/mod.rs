//! Canonical PHP vocabulary used by the tokenizer and the sniffs.
//!
//! Each submodule is a **registry**: a stable identifier type plus a `const` metadata table, with lookup helpers.
//!
//! ## Notes
//! - PHP keywords are case-insensitive; every `from_str` here folds ASCII case before comparing.
//! - Registries are metadata only. Deciding *where* a keyword is legal is the job of the syntax crate and the
//!   sniffs.

pub mod keywords;
pub mod literals;
pub mod reserved;
