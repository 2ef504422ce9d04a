use crate::types::FieldDescriptor;
use indexmap::IndexMap;
use std::any::TypeId;

#[derive(Clone, Debug)]
pub struct ObjectType {
    pub(crate) name: String,
    pub(crate) type_id: TypeId,
    pub(crate) fields: IndexMap<String, FieldDescriptor>,
    pub(crate) interfaces: Vec<String>,
}

impl ObjectType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDescriptor> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    /// Names of the interfaces this object implements.
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.iter().any(|name| name == interface)
    }
}
