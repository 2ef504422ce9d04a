use crate::types::TypeNode;
use indexmap::IndexMap;
use std::any::TypeId;

#[derive(Clone, Debug)]
pub struct InterfaceType {
    pub(crate) name: String,
    pub(crate) type_id: TypeId,
    pub(crate) fields: IndexMap<String, InterfaceField>,
    pub(crate) implementations: Vec<String>,
}

impl InterfaceType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn fields(&self) -> &IndexMap<String, InterfaceField> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&InterfaceField> {
        self.fields.get(name)
    }

    /// Names of the object types implementing this interface.
    pub fn implementations(&self) -> &[String] {
        &self.implementations
    }
}

/// A field every implementation provides, derived from one of the
/// interface's resolver methods.
#[derive(Clone, Debug)]
pub struct InterfaceField {
    pub(crate) name: String,
    pub(crate) host_name: String,
    pub(crate) node: TypeNode,
}

impl InterfaceField {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn node(&self) -> &TypeNode {
        &self.node
    }
}
