use serde::Serialize;

/// A location in query source text.
///
/// All values are 0-based. [`Display`](std::fmt::Display) renders the
/// conventional 1-based `line:column` form used in error messages and in the
/// `locations` entries of a response.
///
/// Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// 0-based character column within the current line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The `(line, column)` pair in 1-based form.
    pub fn to_one_based(&self) -> (usize, usize) {
        (self.line + 1, self.column + 1)
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}
