//! Declaration-name queries over a token stream.
//!
//! These mirror the questions a sniff asks about the token it was triggered on: "what name does the class-like
//! declaration starting here declare?" and "what namespace does the declaration starting here declare?".
//!
//! ## Notes
//! - Every query returns `None` for anything that is not a well-formed declaration (anonymous classes, the
//!   `namespace\` operator, truncated input). Callers treat `None` as "nothing to check".

use crate::ast::{Declaration, DeclarationOpener, DeclaredName};
use crate::lexer::{Token, TokenKind};
use phpcompat_core::lang::keywords::KeywordId;

/// Name declared by the `class`/`interface`/`trait`/`enum` token at `ptr`.
///
/// Returns `None` for anonymous classes (`new class`, `class {`, `class (`, `class extends`) and when `ptr` does not
/// point at a class-like opener.
pub fn object_declaration_name(tokens: &[Token], ptr: usize) -> Option<DeclaredName> {
    let opener = tokens.get(ptr)?.keyword_id().and_then(DeclarationOpener::from_keyword)?;
    if !opener.is_oo_scope() {
        return None;
    }

    if previous_significant(tokens, ptr).is_some_and(|tok| tok.kind.is_keyword(KeywordId::New)) {
        return None;
    }

    let next = tokens.get(ptr + 1)?;
    match next.kind {
        TokenKind::Ident | TokenKind::Literal(_) => Some(DeclaredName {
            text: next.text.clone(),
            span: next.span,
            literal: next.literal_id(),
        }),
        _ => None,
    }
}

/// Name declared by the `namespace` token at `ptr`.
///
/// Returns `Some("")` for a global namespace block (`namespace { ... }`) and `None` for the namespace operator
/// (`namespace\foo()`) or a statement that never reaches `;`, `{` or `?>`.
pub fn namespace_declared_name(tokens: &[Token], ptr: usize) -> Option<String> {
    if !tokens.get(ptr)?.kind.is_keyword(KeywordId::Namespace) {
        return None;
    }

    let mut name = String::new();
    for tok in &tokens[ptr + 1..] {
        match tok.kind {
            TokenKind::Punct(';') | TokenKind::Punct('{') | TokenKind::CloseTag => return Some(name),
            // A leading separator is the namespace operator, not a declaration.
            TokenKind::NsSeparator if name.is_empty() => return None,
            TokenKind::NsSeparator => name.push('\\'),
            kind if kind.is_name_part() => name.push_str(&tok.text),
            _ => return None,
        }
    }
    None
}

/// Build the declaration that starts at `ptr`, if the token there opens one.
pub fn declaration_at(tokens: &[Token], ptr: usize) -> Option<Declaration> {
    let tok = tokens.get(ptr)?;
    let opener = tok.keyword_id().and_then(DeclarationOpener::from_keyword)?;

    match opener {
        DeclarationOpener::Namespace => namespace_declared_name(tokens, ptr).map(|name| Declaration::Namespace {
            name,
            span: tok.span,
        }),
        _ => Some(Declaration::Type {
            opener,
            name: object_declaration_name(tokens, ptr),
            span: tok.span,
        }),
    }
}

/// Every declaration in the token stream, in source order.
pub fn declarations(tokens: &[Token]) -> Vec<Declaration> {
    (0..tokens.len()).filter_map(|ptr| declaration_at(tokens, ptr)).collect()
}

/// Closest token before `ptr` that is not an attribute.
fn previous_significant(tokens: &[Token], ptr: usize) -> Option<&Token> {
    let mut idx = ptr;
    while idx > 0 {
        idx -= 1;
        let tok = &tokens[idx];
        if tok.kind.is_punct(']') {
            // Skip a `#[...]` attribute group: `new #[Attr] class {}`.
            idx = attribute_start(tokens, idx)?;
            continue;
        }
        return Some(tok);
    }
    None
}

/// Index of the `#[` that opens the attribute group closed by the `]` at `close`.
fn attribute_start(tokens: &[Token], close: usize) -> Option<usize> {
    let mut depth = 0usize;
    for idx in (0..close).rev() {
        match tokens[idx].kind {
            TokenKind::Punct(']') => depth += 1,
            TokenKind::Punct('[') if depth > 0 => depth -= 1,
            TokenKind::AttributeStart if depth == 0 => return Some(idx),
            TokenKind::AttributeStart => depth -= 1,
            TokenKind::Punct('[') => return None,
            _ => {}
        }
    }
    None
}
