use crate::ParseErrorKind;
use crate::SourcePosition;

/// A parse error with the position it was detected at.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message} at {position}")]
pub struct ParseError {
    message: String,
    position: SourcePosition,
    kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(
        message: impl Into<String>,
        position: SourcePosition,
        kind: ParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            position,
            kind,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Renders the error with a one-line source excerpt and a caret under
    /// the offending column:
    ///
    /// ```text
    /// error: expected `:`, found `4`
    ///   --> 1:11
    ///    |
    ///  1 | { user(id 4) }
    ///    |           ^
    /// ```
    pub fn format_detailed(&self, source: &str) -> String {
        let (line, column) = self.position.to_one_based();
        let mut output = format!("error: {}\n  --> {}\n", self.message, self.position);
        if let Some(text) = source.lines().nth(self.position.line()) {
            let gutter = line.to_string().len();
            let pad = " ".repeat(gutter);
            output.push_str(&format!(" {pad} |\n"));
            output.push_str(&format!(" {line} | {text}\n"));
            output.push_str(&format!(
                " {pad} | {}^\n",
                " ".repeat(column.saturating_sub(1)),
            ));
        }
        output
    }
}
