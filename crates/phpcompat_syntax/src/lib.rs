//! Shared syntax frontend for phpcompat: a minimal PHP tokenizer and the declaration queries sniffs build on.
//!
//! ## Notes
//! - Syntax-only. It tokenizes enough PHP to locate declaration heads (`class Foo`, `namespace A\B;`) and is not a
//!   PHP parser.
//! - Vocabulary identity (keywords, literal keywords) comes from `phpcompat_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use phpcompat_syntax::{declarations, lexer};
//!
//! let tokens = lexer::lex("<?php class Foo {}").unwrap();
//! let decls = declarations::declarations(&tokens);
//! assert_eq!(decls.len(), 1);
//! ```

pub mod ast;
pub mod declarations;
pub mod diagnostics;
pub mod lexer;
pub mod token_helpers;
