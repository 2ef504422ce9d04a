use hostql_parser::ParseError;
use hostql_parser::SourcePosition;
use serde::Serialize;

/// An error recorded while executing a request.
///
/// Serializes to the conventional response-error shape; `path` and
/// `locations` are omitted when empty.
#[derive(Clone, Debug, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ExecutionError {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
            locations: Vec::new(),
        }
    }

    pub fn at(mut self, position: SourcePosition) -> Self {
        self.locations.push(position.into());
        self
    }
}

impl From<&ParseError> for ExecutionError {
    fn from(err: &ParseError) -> Self {
        ExecutionError::new(err.message()).at(err.position())
    }
}

/// One step of the response path to the failing value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A 1-based line and column in the query text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

impl From<SourcePosition> for ErrorLocation {
    fn from(position: SourcePosition) -> Self {
        let (line, column) = position.to_one_based();
        Self { line, column }
    }
}
