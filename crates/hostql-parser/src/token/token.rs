use crate::token::TokenKind;
use crate::SourcePosition;

/// A lexed token together with the position of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub position: SourcePosition,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind<'src>, position: SourcePosition) -> Self {
        Self { kind, position }
    }
}
