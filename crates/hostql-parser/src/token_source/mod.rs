//! Token source trait and the `&str` lexer.

mod str_token_source;

pub use str_token_source::StrTokenSource;

use crate::token::Token;

/// Anything that yields [`Token`]s and finishes with a single `Eof` token.
pub trait TokenSource<'src>: Iterator<Item = Token<'src>> {}

impl<'src, T> TokenSource<'src> for T where T: Iterator<Item = Token<'src>> {}

/// Whether `name` matches `[_A-Za-z][_0-9A-Za-z]*`.
///
/// Used by the lexer and anywhere else a host-supplied string must be usable
/// as a query-facing name (enum labels, field tags, type renames).
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => chars.all(is_name_continue),
        _ => false,
    }
}

pub(crate) fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

pub(crate) fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}
