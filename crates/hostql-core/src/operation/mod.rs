//! Document-level validation and operation selection.

mod document_error;
mod executable_document;

pub use document_error::DocumentError;
pub use executable_document::ExecutableDocument;
