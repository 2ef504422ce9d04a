use crate::enums::EnumRegistrationError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("the {root} root must be a struct type, found `{type_name}`")]
    RootNotObject {
        root: &'static str,
        type_name: String,
    },

    #[error(
        "the query and mutation roots are both `{type_name}`; enable \
        `allow_identical_roots` to permit this"
    )]
    IdenticalRootTypes {
        type_name: String,
    },

    #[error("the type name `{type_name}` is used by both `{first}` and `{second}`")]
    DuplicateTypeName {
        type_name: String,
        first: String,
        second: String,
    },

    #[error("`{type_name}.{field_name}` is marked as an ID but its type is not a scalar")]
    IdOnCompositeType {
        type_name: String,
        field_name: String,
    },

    #[error(
        "`{type_name}.{field_name}` is marked as an ID but has kind `{kind}`; \
        IDs must be strings or integers"
    )]
    InvalidIdKind {
        type_name: String,
        field_name: String,
        kind: String,
    },

    #[error("interface host type `{rust_name}` must be named")]
    AnonymousInterface {
        rust_name: String,
    },

    #[error("interface `{interface}` has no implementations")]
    InterfaceWithoutImplementations {
        interface: String,
    },

    #[error("`{implementation}` cannot implement `{interface}`: {reason}")]
    InvalidInterfaceImplementation {
        interface: String,
        implementation: String,
        reason: String,
    },

    #[error("`{implementation}` does not provide `{interface}.{method}` with a matching signature")]
    InterfaceNotSatisfied {
        interface: String,
        implementation: String,
        method: String,
    },

    #[error("`{location}` has unsupported type `{type_name}` ({kind})")]
    UnsupportedType {
        location: String,
        type_name: String,
        kind: String,
    },

    #[error("invalid tag `{tag}` on `{type_name}.{field_name}`: {reason}")]
    InvalidFieldTag {
        type_name: String,
        field_name: String,
        tag: String,
        reason: String,
    },

    #[error("`{name}` is not a valid name")]
    InvalidName {
        name: String,
    },

    #[error("resolver `{type_name}.{method}` is variadic")]
    VariadicResolver {
        type_name: String,
        method: String,
    },

    #[error("resolver `{type_name}.{method}` returns nothing")]
    NoReturnValue {
        type_name: String,
        method: String,
    },

    #[error("resolver `{type_name}.{method}` returns more than one error")]
    MultipleErrorOutputs {
        type_name: String,
        method: String,
    },

    #[error("resolver `{type_name}.{method}` returns more than one value")]
    MultipleDataOutputs {
        type_name: String,
        method: String,
    },

    #[error("resolver `{type_name}.{method}` has no data output")]
    NoUsableOutput {
        type_name: String,
        method: String,
    },

    #[error(
        "resolver `{type_name}.{method}` takes `{input}`; inputs must be the \
        resolver context or argument structs"
    )]
    InvalidResolverInput {
        type_name: String,
        method: String,
        input: String,
    },

    #[error("input `{location}` has unsupported type `{type_name}` ({kind})")]
    UnsupportedInputType {
        location: String,
        type_name: String,
        kind: String,
    },

    #[error("`{type_name}` is used as an input but is not constructible")]
    InputNotConstructible {
        type_name: String,
    },

    #[error("`{type_name}.{field_name}` is used as an input but cannot be assigned")]
    InputFieldNotAssignable {
        type_name: String,
        field_name: String,
    },

    #[error("embedded field `{type_name}.{field_name}` must be a struct")]
    EmbeddedNotStruct {
        type_name: String,
        field_name: String,
    },

    #[error("argument `{argument}` of `{type_name}.{method}` is defined more than once")]
    DuplicateArgument {
        type_name: String,
        method: String,
        argument: String,
    },

    #[error("`{location}` refers to unknown type `{type_name}`")]
    DanglingTypeReference {
        location: String,
        type_name: String,
    },

    #[error("cannot rename `{rust_name}` to `{new_name}`: {reason}")]
    InvalidTypeRename {
        rust_name: String,
        new_name: String,
        reason: String,
    },

    #[error("directive `@{name}` is already registered")]
    DuplicateDirective {
        name: String,
    },

    #[error("`{name}` is not a valid directive name")]
    InvalidDirectiveName {
        name: String,
    },

    #[error("directive `@{name}` has no locations")]
    DirectiveWithoutLocations {
        name: String,
    },

    #[error(transparent)]
    Enum(#[from] EnumRegistrationError),
}
