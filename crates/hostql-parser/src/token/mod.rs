//! Tokens produced by a [`TokenSource`](crate::token_source::TokenSource).

#[allow(clippy::module_inception)]
mod token;
mod token_kind;

pub use token::Token;
pub use token_kind::TokenKind;
