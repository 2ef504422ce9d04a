/// Categorizes parse errors for programmatic handling.
///
/// Variants carry only what a caller needs to branch on. The full
/// human-readable text lives in [`ParseError::message()`](crate::ParseError::message).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// ```text
    /// { user(id 4) }
    ///           ^ expected `:`, found `4`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before a construct was complete.
    ///
    /// Kept apart from `UnexpectedToken` so callers can tell truncated input
    /// from malformed input. A `{`, `(` or `[` left open at the end of the
    /// document lands here, with the closing token in `expected`.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer produced an error token (bad character, malformed number,
    /// unterminated string).
    #[error("lexer error")]
    LexerError,

    /// A literal could not be turned into a value (integer overflow, bad
    /// escape sequence, duplicate object key).
    #[error("invalid value")]
    InvalidValue,

    /// A name that is reserved in its position, such as a fragment named
    /// `on`.
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
    },

    /// `{}` or `()`.
    #[error("`{construct}` cannot be empty")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// Selection sets, lists or objects nested deeper than the parser's
    /// limit ([`MAX_NESTING_DEPTH`](crate::MAX_NESTING_DEPTH) by default).
    #[error("maximum nesting depth exceeded")]
    RecursionLimitExceeded,

    /// Anything else that is structurally wrong (e.g. an unknown keyword at
    /// the start of a definition).
    #[error("invalid syntax")]
    InvalidSyntax,
}
