use std::collections::VecDeque;

use crate::token::Token;
use crate::token::TokenKind;
use crate::token_source::TokenSource;

/// Bounded lookahead over a [`TokenSource`].
///
/// Unconsumed tokens are buffered in a ring buffer; `consume()` pops from the
/// front.
pub struct TokenStream<'src, TTokenSource: TokenSource<'src>> {
    token_source: TTokenSource,
    buffer: VecDeque<Token<'src>>,
}

impl<'src, TTokenSource: TokenSource<'src>> TokenStream<'src, TTokenSource> {
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
        }
    }

    /// Advances to the next token and returns it.
    ///
    /// Returns `None` once the source is exhausted (after `Eof`).
    pub fn consume(&mut self) -> Option<Token<'src>> {
        self.fill_buffer(1);
        self.buffer.pop_front()
    }

    /// Whether the next token is `Eof` or the stream is exhausted.
    pub fn is_at_end(&mut self) -> bool {
        self.peek()
            .is_none_or(|token| matches!(token.kind, TokenKind::Eof))
    }

    #[inline]
    pub fn peek(&mut self) -> Option<&Token<'src>> {
        self.peek_nth(0)
    }

    /// Peeks `n` tokens ahead; `peek_nth(0)` is `peek()`.
    pub fn peek_nth(&mut self, n: usize) -> Option<&Token<'src>> {
        self.fill_buffer(n + 1);
        self.buffer.get(n)
    }

    fn fill_buffer(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => self.buffer.push_back(token),
                None => break,
            }
        }
    }
}
