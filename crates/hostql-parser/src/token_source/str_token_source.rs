//! A [`TokenSource`](crate::token_source::TokenSource) that lexes a `&str`.
//!
//! Token values borrow directly from the source text. Ignored tokens (the
//! byte order mark, whitespace, line terminators, commas and `#` comments)
//! are skipped. Invalid input produces `Error` tokens and lexing continues
//! after them so that several problems can be reported at once.
//!
//! ```
//! use hostql_parser::token::TokenKind;
//! use hostql_parser::token_source::StrTokenSource;
//!
//! let kinds: Vec<_> = StrTokenSource::new("{ name }").map(|t| t.kind).collect();
//! assert_eq!(kinds, vec![
//!     TokenKind::CurlyBraceOpen,
//!     TokenKind::Name("name"),
//!     TokenKind::CurlyBraceClose,
//!     TokenKind::Eof,
//! ]);
//! ```

use crate::token::Token;
use crate::token::TokenKind;
use crate::token_source::is_name_continue;
use crate::token_source::is_name_start;
use crate::SourcePosition;

pub struct StrTokenSource<'src> {
    source: &'src str,
    curr_byte_offset: usize,
    curr_line: usize,
    curr_column: usize,

    /// Set after a `\r` so that a following `\n` does not count as a second
    /// line terminator.
    last_char_was_cr: bool,

    finished: bool,
}

impl<'src> StrTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_column: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_column,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes one character, keeping line and column tracking current.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' => {
                self.curr_line += 1;
                self.curr_column = 0;
            },
            '\r' => {
                self.curr_line += 1;
                self.curr_column = 0;
                self.last_char_was_cr = true;
            },
            _ => {
                self.curr_column += 1;
                self.last_char_was_cr = false;
            },
        }
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn error_token(
        &self,
        message: impl Into<String>,
        start: SourcePosition,
    ) -> Token<'src> {
        Token::new(TokenKind::Error { message: message.into() }, start)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> Token<'src> {
        self.skip_ignored();
        let start = self.curr_position();

        let punctuator = match self.peek_char() {
            None => return Token::new(TokenKind::Eof, start),
            Some('!') => TokenKind::Bang,
            Some('$') => TokenKind::Dollar,
            Some('&') => TokenKind::Ampersand,
            Some('(') => TokenKind::ParenOpen,
            Some(')') => TokenKind::ParenClose,
            Some(':') => TokenKind::Colon,
            Some('=') => TokenKind::Equals,
            Some('@') => TokenKind::At,
            Some('[') => TokenKind::SquareBracketOpen,
            Some(']') => TokenKind::SquareBracketClose,
            Some('{') => TokenKind::CurlyBraceOpen,
            Some('}') => TokenKind::CurlyBraceClose,
            Some('|') => TokenKind::Pipe,
            Some('.') => return self.lex_ellipsis(start),
            Some('"') => return self.lex_string(start),
            Some(c) if is_name_start(c) => return self.lex_name(start),
            Some(c) if c == '-' || c.is_ascii_digit() => return self.lex_number(start),
            Some(c) => {
                self.consume();
                return self.error_token(
                    format!("unexpected character {c:?}"),
                    start,
                );
            },
        };
        self.consume();
        Token::new(punctuator, start)
    }

    /// Skips whitespace, line terminators, commas, the BOM and comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Comments run to the next line terminator. They never contain one, so
    /// the column can be advanced by the comment's character count directly.
    fn skip_comment(&mut self) {
        let rest = self.remaining();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes())
            .unwrap_or(rest.len());
        self.curr_column += rest[..len].chars().count();
        self.curr_byte_offset += len;
        self.last_char_was_cr = false;
    }

    fn lex_ellipsis(&mut self, start: SourcePosition) -> Token<'src> {
        if self.remaining().starts_with("...") {
            self.consume();
            self.consume();
            self.consume();
            return Token::new(TokenKind::Ellipsis, start);
        }
        self.consume_while(|ch| ch == '.');
        self.error_token("unexpected `.` (did you mean `...`?)", start)
    }

    fn lex_name(&mut self, start: SourcePosition) -> Token<'src> {
        let name_start = self.curr_byte_offset;
        self.consume_while(is_name_continue);
        let name = &self.source[name_start..self.curr_byte_offset];
        let kind = match name {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => TokenKind::Name(name),
        };
        Token::new(kind, start)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
    ///
    /// A number directly followed by a name-start character or `.` is an
    /// error (`123abc`, `1.2.3`, `0x10`).
    fn lex_number(&mut self, start: SourcePosition) -> Token<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return self.number_error(
                        num_start,
                        "leading zeros are not allowed",
                        start,
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_while(|ch| ch.is_ascii_digit());
            },
            _ => return self.error_token("unexpected `-`", start),
        }

        if self.peek_char() == Some('.') {
            if !self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
                return self.number_error(
                    num_start,
                    "a decimal point must be followed by a digit",
                    start,
                );
            }
            is_float = true;
            self.consume();
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.number_error(
                    num_start,
                    "an exponent must have at least one digit",
                    start,
                );
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if let Some(ch) = self.peek_char()
            && (ch == '.' || is_name_start(ch))
        {
            return self.number_error(
                num_start,
                &format!("unexpected {ch:?} after number"),
                start,
            );
        }

        let text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            TokenKind::FloatValue(text)
        } else {
            TokenKind::IntValue(text)
        };
        Token::new(kind, start)
    }

    /// Consumes the rest of a malformed number so lexing resumes after it.
    fn number_error(
        &mut self,
        num_start: usize,
        message: &str,
        start: SourcePosition,
    ) -> Token<'src> {
        self.consume_while(|ch| ch == '.' || ch == '+' || ch == '-' || is_name_continue(ch));
        let text = &self.source[num_start..self.curr_byte_offset];
        self.error_token(format!("invalid number `{text}`: {message}"), start)
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    fn lex_string(&mut self, start: SourcePosition) -> Token<'src> {
        let str_start = self.curr_byte_offset;
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None => {
                    return self.error_token("unterminated string literal", start);
                },
                Some('\n' | '\r') => {
                    return self.error_token(
                        "unterminated string literal (use a block string for \
                         multi-line text)",
                        start,
                    );
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if self.peek_char().is_some_and(|ch| ch != '\n' && ch != '\r') {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        Token::new(TokenKind::StringValue(text), start)
    }

    fn lex_block_string(
        &mut self,
        start: SourcePosition,
        str_start: usize,
    ) -> Token<'src> {
        self.consume();
        self.consume();
        self.consume();
        loop {
            let rest = self.remaining();
            if rest.is_empty() {
                return self.error_token("unterminated block string", start);
            }
            if rest.starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
            } else if rest.starts_with("\"\"\"") {
                self.consume();
                self.consume();
                self.consume();
                break;
            } else {
                self.consume();
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        Token::new(TokenKind::StringValue(text), start)
    }
}

impl<'src> Iterator for StrTokenSource<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if matches!(token.kind, TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}
