use hostql_parser::SourcePosition;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DocumentError {
    #[error("duplicate operation name `{name}`")]
    DuplicateOperationName {
        name: String,
        first_position: SourcePosition,
        second_position: SourcePosition,
    },

    #[error("an anonymous operation must be the only operation in the document")]
    AnonymousOperationNotAlone {
        position: SourcePosition,
    },

    #[error("duplicate fragment definition `{fragment_name}`")]
    DuplicateFragmentName {
        fragment_name: String,
        first_position: SourcePosition,
        second_position: SourcePosition,
    },

    #[error("Fragment cycle detected: {}", format_cycle_path(.cycle_path))]
    FragmentCycle {
        cycle_path: Vec<String>,
    },

    #[error(
        "the document contains several operations; choose one of: {}",
        .available.join(", ")
    )]
    OperationNameRequired {
        available: Vec<String>,
    },

    #[error(
        "unknown operation `{name}`; the document defines: {}",
        .available.join(", ")
    )]
    UnknownOperation {
        name: String,
        available: Vec<String>,
    },
}

impl DocumentError {
    /// Where in the document the error was found, if anywhere in particular.
    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            DocumentError::DuplicateOperationName { second_position, .. }
            | DocumentError::DuplicateFragmentName { second_position, .. } => {
                Some(*second_position)
            },
            DocumentError::AnonymousOperationNotAlone { position } => Some(*position),
            DocumentError::FragmentCycle { .. }
            | DocumentError::OperationNameRequired { .. }
            | DocumentError::UnknownOperation { .. } => None,
        }
    }
}

fn format_cycle_path(cycle: &[String]) -> String {
    cycle.join(" → ")
}
