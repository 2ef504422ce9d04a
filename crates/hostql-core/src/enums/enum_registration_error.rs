#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EnumRegistrationError {
    #[error("enum host type `{rust_name}` must be named")]
    UnnamedType {
        rust_name: String,
    },

    #[error(
        "enum `{name}` must be backed by an integer or string type, found \
        `{kind}`"
    )]
    UnsupportedKind {
        name: String,
        kind: String,
    },

    #[error("enum `{name}` has an invalid label `{label}`")]
    InvalidLabel {
        name: String,
        label: String,
    },

    #[error("enum `{name}` defines the label `{label}` more than once")]
    DuplicateLabel {
        name: String,
        label: String,
    },

    #[error(
        "enum `{name}` maps the labels `{first_label}` and `{second_label}` to \
        the same value"
    )]
    DuplicateValue {
        name: String,
        first_label: String,
        second_label: String,
    },

    #[error("enum label `{label}` of `{name}` has a value of kind `{kind}`")]
    UnsupportedValue {
        name: String,
        label: String,
        kind: String,
    },

    #[error("an enum named `{name}` is already registered")]
    AlreadyRegistered {
        name: String,
    },
}
