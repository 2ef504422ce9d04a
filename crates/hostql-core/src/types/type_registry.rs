use crate::enums::EnumRegistry;
use crate::types::InputType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use indexmap::IndexMap;
use std::any::TypeId;
use std::collections::HashMap;

/// All object, interface, input and enum types reachable from a schema's
/// roots.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    pub(crate) objects: IndexMap<String, ObjectType>,
    pub(crate) interfaces: IndexMap<String, InterfaceType>,
    pub(crate) inputs: IndexMap<String, InputType>,
    pub(crate) enums: EnumRegistry,
    pub(crate) object_names_by_type: HashMap<TypeId, String>,
}

impl TypeRegistry {
    pub fn object(&self, name: &str) -> Option<&ObjectType> {
        self.objects.get(name)
    }

    pub fn objects(&self) -> impl Iterator<Item = &ObjectType> {
        self.objects.values()
    }

    /// The object type registered for a host type.
    pub fn object_for_type(&self, type_id: TypeId) -> Option<&ObjectType> {
        self.object_names_by_type
            .get(&type_id)
            .and_then(|name| self.objects.get(name))
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceType> {
        self.interfaces.get(name)
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceType> {
        self.interfaces.values()
    }

    pub fn input(&self, name: &str) -> Option<&InputType> {
        self.inputs.get(name)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &InputType> {
        self.inputs.values()
    }

    pub fn enums(&self) -> &EnumRegistry {
        &self.enums
    }
}
