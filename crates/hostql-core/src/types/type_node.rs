use crate::host::ScalarKind;
use crate::types::MethodDescriptor;

/// The shape of a field's value.
#[derive(Clone, Debug)]
pub enum TypeNode {
    Scalar {
        kind: ScalarKind,
        is_id: bool,
    },
    Time,
    List(Box<TypeNode>),
    Optional(Box<TypeNode>),
    ObjectRef(String),
    InterfaceRef(String),
    Enum(String),
    /// A resolver; the value is the method's data output.
    Method(Box<MethodDescriptor>),
}

impl TypeNode {
    /// The node values are written with: a resolver's output node, or
    /// `self`.
    pub fn value_node(&self) -> &TypeNode {
        match self {
            TypeNode::Method(method) => &method.output,
            other => other,
        }
    }

    /// Name of the object, interface or enum at the bottom of any list and
    /// optional wrappers.
    pub fn named_type(&self) -> Option<&str> {
        match self {
            TypeNode::List(inner) | TypeNode::Optional(inner) => inner.named_type(),
            TypeNode::ObjectRef(name)
            | TypeNode::InterfaceRef(name)
            | TypeNode::Enum(name) => Some(name),
            TypeNode::Method(method) => method.output.named_type(),
            TypeNode::Scalar { .. } | TypeNode::Time => None,
        }
    }

    /// Whether values of this node are written with a selection set.
    pub fn is_composite(&self) -> bool {
        match self.value_node() {
            TypeNode::List(inner) | TypeNode::Optional(inner) => inner.is_composite(),
            TypeNode::ObjectRef(_) | TypeNode::InterfaceRef(_) => true,
            _ => false,
        }
    }

    /// Describes the node the way a query would spell the type, e.g.
    /// `[User!]` or `Int!`.
    pub fn describe(&self) -> String {
        fn inner(node: &TypeNode) -> String {
            match node {
                TypeNode::Optional(inner_node) => {
                    let text = inner(inner_node);
                    text.strip_suffix('!').map(str::to_string).unwrap_or(text)
                },
                TypeNode::List(elem) => format!("[{}]!", inner(elem)),
                TypeNode::Scalar { is_id: true, .. } => "ID!".to_string(),
                TypeNode::Scalar { kind, .. } => {
                    let name = if kind.is_int() {
                        "Int"
                    } else if kind.is_float() {
                        "Float"
                    } else if *kind == ScalarKind::Bool {
                        "Boolean"
                    } else {
                        "String"
                    };
                    format!("{name}!")
                },
                TypeNode::Time => "Time!".to_string(),
                TypeNode::ObjectRef(name)
                | TypeNode::InterfaceRef(name)
                | TypeNode::Enum(name) => format!("{name}!"),
                TypeNode::Method(method) => inner(&method.output),
            }
        }
        inner(self)
    }
}
