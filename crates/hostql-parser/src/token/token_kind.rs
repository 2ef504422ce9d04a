use crate::string_value;
use crate::StringValueError;
use std::num::ParseFloatError;
use std::num::ParseIntError;

/// The kind of a lexed token.
///
/// Names and literals borrow their raw text from the source. String literals
/// keep their surrounding quotes (and escapes) until
/// [`parse_string_value()`](Self::parse_string_value) cooks them.
///
/// `true`, `false` and `null` are lexed as distinct kinds so value parsing can
/// match on them directly; they are still accepted wherever a name is
/// expected.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind<'src> {
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    /// `[_A-Za-z][_0-9A-Za-z]*`
    Name(&'src str),
    /// Raw integer literal text, sign included.
    IntValue(&'src str),
    /// Raw float literal text, sign included.
    FloatValue(&'src str),
    /// Raw string or block string literal, quotes included.
    StringValue(&'src str),

    True,
    False,
    Null,

    Eof,

    /// A lexer error. Errors are tokens so that the parser decides how to
    /// report and recover from them.
    Error { message: String },
}

impl<'src> TokenKind<'src> {
    /// The punctuator text for punctuator kinds, `None` otherwise.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::Ampersand => "&",
            TokenKind::At => "@",
            TokenKind::Bang => "!",
            TokenKind::Colon => ":",
            TokenKind::CurlyBraceClose => "}",
            TokenKind::CurlyBraceOpen => "{",
            TokenKind::Dollar => "$",
            TokenKind::Ellipsis => "...",
            TokenKind::Equals => "=",
            TokenKind::ParenClose => ")",
            TokenKind::ParenOpen => "(",
            TokenKind::Pipe => "|",
            TokenKind::SquareBracketClose => "]",
            TokenKind::SquareBracketOpen => "[",
            _ => return None,
        })
    }

    /// Human readable form for error messages.
    pub fn describe(&self) -> String {
        if let Some(punctuator) = self.as_punctuator_str() {
            return punctuator.to_string();
        }
        match self {
            TokenKind::Name(name) => (*name).to_string(),
            TokenKind::IntValue(raw)
            | TokenKind::FloatValue(raw)
            | TokenKind::StringValue(raw) => (*raw).to_string(),
            TokenKind::True => "true".to_string(),
            TokenKind::False => "false".to_string(),
            TokenKind::Null => "null".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Error { message } => message.clone(),
            _ => format!("{self:?}"),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error { .. })
    }

    /// Whether a token of this kind can stand in for a name.
    pub fn is_name_like(&self) -> bool {
        matches!(
            self,
            TokenKind::Name(_) | TokenKind::True | TokenKind::False | TokenKind::Null,
        )
    }

    /// The name text of name-like kinds.
    pub fn name_text(&self) -> Option<&'src str> {
        match self {
            TokenKind::Name(name) => Some(name),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Null => Some("null"),
            _ => None,
        }
    }

    /// Parses an `IntValue`'s raw text to `i64`.
    ///
    /// Returns `None` for any other kind.
    pub fn parse_int_value(&self) -> Option<Result<i64, ParseIntError>> {
        match self {
            TokenKind::IntValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Parses a `FloatValue`'s raw text to `f64`.
    pub fn parse_float_value(&self) -> Option<Result<f64, ParseFloatError>> {
        match self {
            TokenKind::FloatValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Cooks a `StringValue`'s raw text: strips quotes, processes escapes
    /// and applies block string indentation rules.
    pub fn parse_string_value(&self) -> Option<Result<String, StringValueError>> {
        match self {
            TokenKind::StringValue(raw) => Some(string_value::cook(raw)),
            _ => None,
        }
    }
}
