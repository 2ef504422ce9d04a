use crate::host::Getter;
use crate::types::TypeNode;

/// One query-visible field of an object type.
#[derive(Clone)]
pub struct FieldDescriptor {
    pub(crate) name: String,
    pub(crate) host_name: String,
    pub(crate) accessor: FieldAccessor,
    pub(crate) is_id: bool,
    pub(crate) node: TypeNode,
}

impl FieldDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the host field or method this field reads from.
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn accessor(&self) -> &FieldAccessor {
        &self.accessor
    }

    pub fn is_id(&self) -> bool {
        self.is_id
    }

    pub fn node(&self) -> &TypeNode {
        &self.node
    }

    pub fn is_resolver(&self) -> bool {
        matches!(self.node, TypeNode::Method(_))
    }
}

impl std::fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("host_name", &self.host_name)
            .field("is_id", &self.is_id)
            .field("node", &self.node)
            .finish()
    }
}

/// How a field's value is reached from an object.
///
/// Fields promoted from embedded structs first follow the getters of the
/// embedding chain.
#[derive(Clone)]
pub enum FieldAccessor {
    /// Getters applied in order; the last one reads the field itself.
    Data(Vec<Getter>),
    /// Getters leading to the resolver's receiver.
    Method { receiver: Vec<Getter> },
}
