//! Owned syntax tree of a query document.
//!
//! Every node that can be the subject of an execution error carries the
//! [`SourcePosition`] of its first token.

use crate::SourcePosition;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            Definition::Operation(_) => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "definition")]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `query`/`mutation`/`subscription` definition, or the `{ ... }`
/// shorthand (an anonymous query).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub position: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableDefinition {
    pub name: String,
    pub type_annotation: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub position: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TypeAnnotation {
    Named { name: String, nullable: bool },
    List { element: Box<TypeAnnotation>, nullable: bool },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub position: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionSet {
    pub items: Vec<Selection>,
    pub position: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "selection")]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn directives(&self) -> &[Directive] {
        match self {
            Selection::Field(field) => &field.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
            Selection::InlineFragment(inline) => &inline.directives,
        }
    }

    pub fn position(&self) -> SourcePosition {
        match self {
            Selection::Field(field) => field.position,
            Selection::FragmentSpread(spread) => spread.position,
            Selection::InlineFragment(inline) => inline.position,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    pub position: SourcePosition,
}

impl Field {
    /// The key this field's value is written under: the alias when present.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragmentSpread {
    pub fragment_name: String,
    pub directives: Vec<Directive>,
    pub position: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub position: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub position: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Argument {
    pub name: String,
    pub value: Value,
    pub position: SourcePosition,
}

/// A literal (or variable reference) appearing in argument position.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Variable(String),
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Short description of the literal's kind for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Variable(_) => "variable",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Null => "null",
            Value::Enum(_) => "enum",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }
}
