use crate::enums::EnumRegistry;
use crate::host::Getter;
use crate::host::HostFieldKind;
use crate::host::HostKind;
use crate::host::HostType;
use crate::host::InterfaceDecl;
use crate::host::Invoker;
use crate::host::ScalarKind;
use crate::host::Signature;
use crate::host::StructDecl;
use crate::host::TypeFn;
use crate::schema::FieldTag;
use crate::schema::SchemaBuildError;
use crate::schema::format_host_name;
use crate::schema::host_name::resolver_name;
use crate::types::ArgumentTarget;
use crate::types::FieldAccessor;
use crate::types::FieldDescriptor;
use crate::types::InputField;
use crate::types::InputKind;
use crate::types::InputType;
use crate::types::InterfaceField;
use crate::types::InterfaceType;
use crate::types::MethodDescriptor;
use crate::types::MethodInput;
use crate::types::ObjectType;
use crate::types::TypeNode;
use crate::types::TypeRegistry;
use hostql_parser::is_valid_name;
use indexmap::IndexMap;
use std::any::TypeId;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// A resolver whose inputs are checked once every output type is known.
struct PendingMethod {
    object: String,
    field: String,
    method: String,
    inputs: Vec<TypeFn>,
}

struct ClassifiedOutputs {
    data: HostType,
    data_slot: usize,
    error_slot: Option<usize>,
    is_id: bool,
}

/// Walks host type descriptions and builds the [`TypeRegistry`].
///
/// Types are registered under their name before their fields are visited,
/// so recursive types terminate.
pub(crate) struct TypeGraphBuilder<'a> {
    enums: &'a EnumRegistry,
    renames: &'a HashMap<TypeId, String>,
    objects: IndexMap<String, ObjectType>,
    interfaces: IndexMap<String, InterfaceType>,
    inputs: IndexMap<String, InputType>,
    object_names_by_type: HashMap<TypeId, String>,
    interface_names_by_type: HashMap<TypeId, String>,
    input_names_by_type: HashMap<TypeId, String>,
    input_rust_names: HashMap<String, &'static str>,
    type_names: HashMap<String, (TypeId, &'static str)>,
    unknown_types: usize,
    unknown_inputs: usize,
    pending_methods: Vec<PendingMethod>,
}

impl<'a> TypeGraphBuilder<'a> {
    pub(crate) fn new(enums: &'a EnumRegistry, renames: &'a HashMap<TypeId, String>) -> Self {
        Self {
            enums,
            renames,
            objects: IndexMap::new(),
            interfaces: IndexMap::new(),
            inputs: IndexMap::new(),
            object_names_by_type: HashMap::new(),
            interface_names_by_type: HashMap::new(),
            input_names_by_type: HashMap::new(),
            input_rust_names: HashMap::new(),
            type_names: HashMap::new(),
            unknown_types: 0,
            unknown_inputs: 0,
            pending_methods: Vec::new(),
        }
    }

    pub(crate) fn register_root(&mut self, root: &'static str, ty: &HostType) -> Result<String> {
        match &ty.kind {
            HostKind::Struct(decl) => self.register_object(ty, decl),
            _ => Err(SchemaBuildError::RootNotObject {
                root,
                type_name: ty.display_name().to_string(),
            }),
        }
    }

    pub(crate) fn finish(mut self) -> Result<TypeRegistry> {
        self.resolve_pending_methods()?;
        self.check_references()?;
        Ok(TypeRegistry {
            objects: self.objects,
            interfaces: self.interfaces,
            inputs: self.inputs,
            enums: self.enums.clone(),
            object_names_by_type: self.object_names_by_type,
        })
    }

    fn declared_name(&self, ty: &HostType) -> Option<String> {
        self.renames
            .get(&ty.type_id)
            .cloned()
            .or_else(|| ty.name.clone())
    }

    fn claim_type_name(&mut self, name: &str, ty: &HostType) -> Result<()> {
        if !is_valid_name(name) {
            return Err(SchemaBuildError::InvalidName {
                name: name.to_string(),
            });
        }
        match self.type_names.get(name) {
            Some((type_id, _)) if *type_id == ty.type_id => Ok(()),
            Some((_, first)) => Err(SchemaBuildError::DuplicateTypeName {
                type_name: name.to_string(),
                first: first.to_string(),
                second: ty.rust_name.to_string(),
            }),
            None => {
                self.type_names
                    .insert(name.to_string(), (ty.type_id, ty.rust_name));
                Ok(())
            },
        }
    }

    fn register_output(&mut self, ty: &HostType, location: &str) -> Result<TypeNode> {
        match &ty.kind {
            HostKind::Scalar(kind) => Ok(match self.enums.get_by_type(ty.type_id) {
                Some(enum_type) => TypeNode::Enum(enum_type.name().to_string()),
                None => TypeNode::Scalar {
                    kind: *kind,
                    is_id: false,
                },
            }),
            HostKind::Time => Ok(TypeNode::Time),
            HostKind::List(elem) => Ok(TypeNode::List(Box::new(
                self.register_output(&elem(), location)?,
            ))),
            HostKind::Optional(elem) => Ok(TypeNode::Optional(Box::new(
                self.register_output(&elem(), location)?,
            ))),
            HostKind::Struct(decl) => Ok(TypeNode::ObjectRef(self.register_object(ty, decl)?)),
            HostKind::Interface(decl) => {
                Ok(TypeNode::InterfaceRef(self.register_interface(ty, decl)?))
            },
            HostKind::Context
            | HostKind::ErrorMarker
            | HostKind::IdMarker
            | HostKind::Unsupported(_) => Err(SchemaBuildError::UnsupportedType {
                location: location.to_string(),
                type_name: ty.display_name().to_string(),
                kind: ty.kind.describe().to_string(),
            }),
        }
    }

    fn register_object(&mut self, ty: &HostType, decl: &StructDecl) -> Result<String> {
        if let Some(name) = self.object_names_by_type.get(&ty.type_id) {
            return Ok(name.clone());
        }
        let name = match self.declared_name(ty) {
            Some(name) => name,
            None => {
                self.unknown_types += 1;
                format!("__UnknownType{}", self.unknown_types)
            },
        };
        self.claim_type_name(&name, ty)?;
        log::trace!("registering object type `{name}` for `{}`", ty.rust_name);

        self.object_names_by_type.insert(ty.type_id, name.clone());
        self.objects.insert(name.clone(), ObjectType {
            name: name.clone(),
            type_id: ty.type_id,
            fields: IndexMap::new(),
            interfaces: Vec::new(),
        });

        let mut fields = IndexMap::new();
        self.collect_fields(&name, decl, &[], &mut fields)?;
        if let Some(object) = self.objects.get_mut(&name) {
            object.fields = fields;
        }
        Ok(name)
    }

    /// Adds the fields and resolvers of `decl` to `fields`, promoting those
    /// of embedded structs.
    fn collect_fields(
        &mut self,
        owner: &str,
        decl: &StructDecl,
        path: &[Getter],
        fields: &mut IndexMap<String, FieldDescriptor>,
    ) -> Result<()> {
        for field in &decl.fields {
            let tag = FieldTag::parse(owner, &field.name, field.tag.as_deref())?;
            if tag.excluded {
                continue;
            }

            match &field.kind {
                HostFieldKind::Data { ty, getter, .. } => {
                    let Some(getter) = getter else {
                        log::trace!("`{owner}.{}` is write-only; not exposed", field.name);
                        continue;
                    };
                    let mut chain = path.to_vec();
                    chain.push(getter.clone());
                    let field_ty = ty();

                    if field.embedded {
                        let optional_inner = match &field_ty.kind {
                            HostKind::Optional(inner) => Some(*inner),
                            _ => None,
                        };
                        let embedded_ty = optional_inner.map_or(field_ty, |inner| inner());
                        let HostKind::Struct(embedded_decl) = &embedded_ty.kind else {
                            return Err(SchemaBuildError::EmbeddedNotStruct {
                                type_name: owner.to_string(),
                                field_name: field.name.clone(),
                            });
                        };
                        self.collect_fields(owner, embedded_decl, &chain, fields)?;
                        continue;
                    }

                    let location = format!("{owner}.{}", field.name);
                    let mut node = self.register_output(&field_ty, &location)?;
                    if tag.is_id {
                        node = mark_id(node, owner, &field.name)?;
                    }
                    let name = tag.name.unwrap_or_else(|| format_host_name(&field.name));
                    self.drop_pending(owner, &name);
                    fields.insert(name.clone(), FieldDescriptor {
                        name,
                        host_name: field.name.clone(),
                        accessor: FieldAccessor::Data(chain),
                        is_id: tag.is_id,
                        node,
                    });
                },

                HostFieldKind::Func { signature, invoker } => {
                    let short = resolver_name(&field.name).unwrap_or(&field.name);
                    let name = tag.name.unwrap_or_else(|| format_host_name(short));
                    self.add_resolver(ResolverSite {
                        owner,
                        host_name: &field.name,
                        name,
                        signature,
                        invoker,
                        receiver: path,
                        tagged_id: tag.is_id,
                    }, fields)?;
                },
            }
        }

        for method in &decl.methods {
            let (Some(short), Some(invoker)) = (resolver_name(&method.name), &method.invoker) else {
                continue;
            };
            self.add_resolver(ResolverSite {
                owner,
                host_name: &method.name,
                name: format_host_name(short),
                signature: &method.signature,
                invoker,
                receiver: path,
                tagged_id: false,
            }, fields)?;
        }
        Ok(())
    }

    fn add_resolver(
        &mut self,
        site: ResolverSite<'_>,
        fields: &mut IndexMap<String, FieldDescriptor>,
    ) -> Result<()> {
        let outputs = classify_outputs(site.owner, site.host_name, site.signature)?;
        let location = format!("{}.{}", site.owner, site.host_name);
        let mut output = self.register_output(&outputs.data, &location)?;
        let is_id = site.tagged_id || outputs.is_id;
        if is_id {
            output = mark_id(output, site.owner, site.host_name)?;
        }

        self.drop_pending(site.owner, &site.name);
        self.pending_methods.push(PendingMethod {
            object: site.owner.to_string(),
            field: site.name.clone(),
            method: site.host_name.to_string(),
            inputs: site.signature.inputs.clone(),
        });
        fields.insert(site.name.clone(), FieldDescriptor {
            name: site.name,
            host_name: site.host_name.to_string(),
            accessor: FieldAccessor::Method {
                receiver: site.receiver.to_vec(),
            },
            is_id,
            node: TypeNode::Method(Box::new(MethodDescriptor {
                host_name: site.host_name.to_string(),
                inputs: Vec::new(),
                arguments: IndexMap::new(),
                output,
                data_slot: outputs.data_slot,
                error_slot: outputs.error_slot,
                invoker: site.invoker.clone(),
            })),
        });
        Ok(())
    }

    // A later field with the same query name replaces an earlier resolver.
    fn drop_pending(&mut self, owner: &str, field: &str) {
        self.pending_methods
            .retain(|pending| !(pending.object == owner && pending.field == field));
    }

    fn register_interface(&mut self, ty: &HostType, decl: &InterfaceDecl) -> Result<String> {
        if let Some(name) = self.interface_names_by_type.get(&ty.type_id) {
            return Ok(name.clone());
        }
        let Some(name) = self.declared_name(ty) else {
            return Err(SchemaBuildError::AnonymousInterface {
                rust_name: ty.rust_name.to_string(),
            });
        };
        self.claim_type_name(&name, ty)?;
        log::trace!("registering interface `{name}` for `{}`", ty.rust_name);

        self.interface_names_by_type.insert(ty.type_id, name.clone());
        self.interfaces.insert(name.clone(), InterfaceType {
            name: name.clone(),
            type_id: ty.type_id,
            fields: IndexMap::new(),
            implementations: Vec::new(),
        });
        if decl.implementations.is_empty() {
            return Err(SchemaBuildError::InterfaceWithoutImplementations { interface: name });
        }

        let mut fields = IndexMap::new();
        for method in &decl.methods {
            let Some(short) = resolver_name(&method.name) else {
                continue;
            };
            let outputs = classify_outputs(&name, &method.name, &method.signature)?;
            let location = format!("{name}.{}", method.name);
            let mut node = self.register_output(&outputs.data, &location)?;
            if outputs.is_id {
                node = mark_id(node, &name, &method.name)?;
            }
            let field_name = format_host_name(short);
            fields.insert(field_name.clone(), InterfaceField {
                name: field_name,
                host_name: method.name.clone(),
                node,
            });
        }

        let mut implementations: Vec<String> = Vec::new();
        for implementation in &decl.implementations {
            let impl_name = self.register_implementation(&name, decl, &fields, implementation())?;
            if !implementations.contains(&impl_name) {
                implementations.push(impl_name);
            }
        }

        if let Some(interface) = self.interfaces.get_mut(&name) {
            interface.fields = fields;
            interface.implementations = implementations;
        }
        Ok(name)
    }

    fn register_implementation(
        &mut self,
        interface: &str,
        decl: &InterfaceDecl,
        fields: &IndexMap<String, InterfaceField>,
        impl_ty: HostType,
    ) -> Result<String> {
        let invalid = |reason: String| SchemaBuildError::InvalidInterfaceImplementation {
            interface: interface.to_string(),
            implementation: impl_ty.display_name().to_string(),
            reason,
        };
        let HostKind::Struct(impl_decl) = &impl_ty.kind else {
            return Err(invalid(format!(
                "it is a {}, not a struct",
                impl_ty.kind.describe(),
            )));
        };
        if self.declared_name(&impl_ty).is_none() {
            return Err(invalid("it has no name".to_string()));
        }

        for method in &decl.methods {
            let satisfied = impl_decl.methods.iter().any(|candidate| {
                candidate.name == method.name && candidate.signature.matches(&method.signature)
            });
            if !satisfied {
                return Err(SchemaBuildError::InterfaceNotSatisfied {
                    interface: interface.to_string(),
                    implementation: impl_ty.display_name().to_string(),
                    method: method.name.clone(),
                });
            }
        }

        let impl_name = self.register_object(&impl_ty, impl_decl)?;
        let Some(object) = self.objects.get_mut(&impl_name) else {
            return Ok(impl_name);
        };
        if let Some(missing) = fields.keys().find(|field| !object.fields.contains_key(*field)) {
            return Err(invalid(format!("its `{missing}` resolver cannot be called")));
        }
        if !object.implements(interface) {
            object.interfaces.push(interface.to_string());
        }
        Ok(impl_name)
    }

    fn resolve_pending_methods(&mut self) -> Result<()> {
        let pending_methods = std::mem::take(&mut self.pending_methods);
        for pending in pending_methods {
            let mut inputs = Vec::with_capacity(pending.inputs.len());
            let mut arguments: IndexMap<String, ArgumentTarget> = IndexMap::new();

            for (input_index, input) in pending.inputs.iter().enumerate() {
                let input_ty = input();
                match &input_ty.kind {
                    HostKind::Context => inputs.push(MethodInput::Context),
                    HostKind::Struct(decl) => {
                        let input_name = self.register_input(&input_ty, decl)?;
                        let bundle_fields = self
                            .inputs
                            .get(&input_name)
                            .map(|input_type| input_type.fields.clone())
                            .unwrap_or_default();
                        for (argument, field) in bundle_fields {
                            if arguments.contains_key(&argument) {
                                return Err(SchemaBuildError::DuplicateArgument {
                                    type_name: pending.object,
                                    method: pending.method,
                                    argument,
                                });
                            }
                            arguments.insert(argument, ArgumentTarget { input_index, field });
                        }
                        inputs.push(MethodInput::Bundle { input_type: input_name });
                    },
                    _ => {
                        return Err(SchemaBuildError::InvalidResolverInput {
                            type_name: pending.object,
                            method: pending.method,
                            input: input_ty.display_name().to_string(),
                        });
                    },
                }
            }

            let descriptor = self
                .objects
                .get_mut(&pending.object)
                .and_then(|object| object.fields.get_mut(&pending.field))
                .and_then(|field| match &mut field.node {
                    TypeNode::Method(method) => Some(method),
                    _ => None,
                });
            if let Some(method) = descriptor {
                method.inputs = inputs;
                method.arguments = arguments;
            }
        }
        Ok(())
    }

    fn register_input(&mut self, ty: &HostType, decl: &StructDecl) -> Result<String> {
        if let Some(name) = self.input_names_by_type.get(&ty.type_id) {
            return Ok(name.clone());
        }
        let Some(construct) = decl.construct else {
            return Err(SchemaBuildError::InputNotConstructible {
                type_name: ty.display_name().to_string(),
            });
        };
        let name = match self.declared_name(ty) {
            Some(name) if self.type_names.contains_key(&name) => format!("{name}__input"),
            Some(name) => name,
            None => {
                self.unknown_inputs += 1;
                format!("__UnknownInput{}", self.unknown_inputs)
            },
        };
        if !is_valid_name(&name) {
            return Err(SchemaBuildError::InvalidName { name });
        }
        if let Some(first) = self.input_rust_names.get(&name) {
            return Err(SchemaBuildError::DuplicateTypeName {
                first: first.to_string(),
                second: ty.rust_name.to_string(),
                type_name: name,
            });
        }
        log::trace!("registering input type `{name}` for `{}`", ty.rust_name);

        self.input_names_by_type.insert(ty.type_id, name.clone());
        self.input_rust_names.insert(name.clone(), ty.rust_name);
        self.inputs.insert(name.clone(), InputType {
            name: name.clone(),
            type_id: ty.type_id,
            construct,
            fields: IndexMap::new(),
        });

        let mut fields = IndexMap::new();
        for field in &decl.fields {
            let tag = FieldTag::parse(&name, &field.name, field.tag.as_deref())?;
            if tag.excluded {
                continue;
            }
            let HostFieldKind::Data { ty: field_ty, setter, .. } = &field.kind else {
                continue;
            };
            let location = format!("{name}.{}", field.name);
            if field.embedded {
                return Err(SchemaBuildError::UnsupportedInputType {
                    location,
                    type_name: field_ty().display_name().to_string(),
                    kind: "embedded struct".to_string(),
                });
            }
            let Some(setter) = setter else {
                return Err(SchemaBuildError::InputFieldNotAssignable {
                    type_name: name,
                    field_name: field.name.clone(),
                });
            };

            let mut kind = self.input_kind(&field_ty(), &location)?;
            if tag.is_id {
                kind = mark_input_id(kind, &name, &field.name)?;
            }
            let field_name = tag.name.unwrap_or_else(|| format_host_name(&field.name));
            fields.insert(field_name.clone(), InputField {
                name: field_name,
                host_name: field.name.clone(),
                kind,
                setter: setter.clone(),
            });
        }

        if let Some(input) = self.inputs.get_mut(&name) {
            input.fields = fields;
        }
        Ok(name)
    }

    fn input_kind(&mut self, ty: &HostType, location: &str) -> Result<InputKind> {
        match &ty.kind {
            HostKind::Scalar(kind) => Ok(match self.enums.get_by_type(ty.type_id) {
                Some(enum_type) => InputKind::Enum {
                    name: enum_type.name().to_string(),
                    kind: *kind,
                },
                None => InputKind::Scalar {
                    kind: *kind,
                    is_id: false,
                },
            }),
            HostKind::Time => Ok(InputKind::Time),
            HostKind::List(elem) => Ok(InputKind::List(Box::new(
                self.input_kind(&elem(), location)?,
            ))),
            HostKind::Optional(elem) => Ok(InputKind::Optional(Box::new(
                self.input_kind(&elem(), location)?,
            ))),
            HostKind::Struct(decl) => Ok(InputKind::Object(self.register_input(ty, decl)?)),
            _ => Err(SchemaBuildError::UnsupportedInputType {
                location: location.to_string(),
                type_name: ty.display_name().to_string(),
                kind: ty.kind.describe().to_string(),
            }),
        }
    }

    fn check_references(&self) -> Result<()> {
        for object in self.objects.values() {
            for field in object.fields.values() {
                let location = format!("{}.{}", object.name, field.name);
                self.check_node(&location, &field.node)?;
                if let TypeNode::Method(method) = &field.node {
                    for target in method.arguments.values() {
                        self.check_input_kind(&location, &target.field.kind)?;
                    }
                }
            }
        }
        for interface in self.interfaces.values() {
            for field in interface.fields.values() {
                let location = format!("{}.{}", interface.name, field.name);
                self.check_node(&location, &field.node)?;
            }
            for implementation in &interface.implementations {
                if !self.objects.contains_key(implementation) {
                    return Err(SchemaBuildError::DanglingTypeReference {
                        location: interface.name.clone(),
                        type_name: implementation.clone(),
                    });
                }
            }
        }
        for input in self.inputs.values() {
            for field in input.fields.values() {
                let location = format!("{}.{}", input.name, field.name);
                self.check_input_kind(&location, &field.kind)?;
            }
        }
        Ok(())
    }

    fn check_node(&self, location: &str, node: &TypeNode) -> Result<()> {
        let known = match node {
            TypeNode::List(inner) | TypeNode::Optional(inner) => {
                return self.check_node(location, inner);
            },
            TypeNode::Method(method) => return self.check_node(location, &method.output),
            TypeNode::ObjectRef(name) => self.objects.contains_key(name),
            TypeNode::InterfaceRef(name) => self.interfaces.contains_key(name),
            TypeNode::Enum(name) => self.enums.contains(name),
            TypeNode::Scalar { .. } | TypeNode::Time => true,
        };
        if known {
            return Ok(());
        }
        Err(SchemaBuildError::DanglingTypeReference {
            location: location.to_string(),
            type_name: node.named_type().unwrap_or_default().to_string(),
        })
    }

    fn check_input_kind(&self, location: &str, kind: &InputKind) -> Result<()> {
        let (known, name) = match kind {
            InputKind::List(inner) | InputKind::Optional(inner) => {
                return self.check_input_kind(location, inner);
            },
            InputKind::Object(name) => (self.inputs.contains_key(name), name),
            InputKind::Enum { name, .. } => (self.enums.contains(name), name),
            InputKind::Scalar { .. } | InputKind::Time => return Ok(()),
        };
        if known {
            return Ok(());
        }
        Err(SchemaBuildError::DanglingTypeReference {
            location: location.to_string(),
            type_name: name.clone(),
        })
    }
}

struct ResolverSite<'s> {
    owner: &'s str,
    host_name: &'s str,
    name: String,
    signature: &'s Signature,
    invoker: &'s Invoker,
    receiver: &'s [Getter],
    tagged_id: bool,
}

/// Sorts a resolver's outputs into its data output, optional error output
/// and ID marker.
fn classify_outputs(type_name: &str, method: &str, signature: &Signature) -> Result<ClassifiedOutputs> {
    let site = || (type_name.to_string(), method.to_string());
    if signature.variadic {
        let (type_name, method) = site();
        return Err(SchemaBuildError::VariadicResolver { type_name, method });
    }
    if signature.outputs.is_empty() {
        let (type_name, method) = site();
        return Err(SchemaBuildError::NoReturnValue { type_name, method });
    }

    let mut data = None;
    let mut error_slot = None;
    let mut is_id = false;
    for (slot, output) in signature.outputs.iter().enumerate() {
        let output_ty = output();
        match output_ty.kind {
            HostKind::IdMarker => is_id = true,
            HostKind::ErrorMarker => {
                if error_slot.is_some() {
                    let (type_name, method) = site();
                    return Err(SchemaBuildError::MultipleErrorOutputs { type_name, method });
                }
                error_slot = Some(slot);
            },
            _ => {
                if data.is_some() {
                    let (type_name, method) = site();
                    return Err(SchemaBuildError::MultipleDataOutputs { type_name, method });
                }
                data = Some((slot, output_ty));
            },
        }
    }

    let Some((data_slot, data)) = data else {
        let (type_name, method) = site();
        return Err(SchemaBuildError::NoUsableOutput { type_name, method });
    };
    Ok(ClassifiedOutputs {
        data,
        data_slot,
        error_slot,
        is_id,
    })
}

fn mark_id(node: TypeNode, type_name: &str, field_name: &str) -> Result<TypeNode> {
    match node {
        TypeNode::Scalar { kind, .. } if kind.is_int() || kind == ScalarKind::String => {
            Ok(TypeNode::Scalar { kind, is_id: true })
        },
        TypeNode::List(inner) => Ok(TypeNode::List(Box::new(mark_id(*inner, type_name, field_name)?))),
        TypeNode::Optional(inner) => Ok(TypeNode::Optional(Box::new(mark_id(
            *inner, type_name, field_name,
        )?))),
        TypeNode::Scalar { kind, .. } => Err(invalid_id_kind(type_name, field_name, kind.as_str())),
        TypeNode::Time => Err(invalid_id_kind(type_name, field_name, "time")),
        TypeNode::Enum(_) => Err(invalid_id_kind(type_name, field_name, "enum")),
        TypeNode::ObjectRef(_) | TypeNode::InterfaceRef(_) | TypeNode::Method(_) => {
            Err(SchemaBuildError::IdOnCompositeType {
                type_name: type_name.to_string(),
                field_name: field_name.to_string(),
            })
        },
    }
}

fn mark_input_id(kind: InputKind, type_name: &str, field_name: &str) -> Result<InputKind> {
    match kind {
        InputKind::Scalar { kind, .. } if kind.is_int() || kind == ScalarKind::String => {
            Ok(InputKind::Scalar { kind, is_id: true })
        },
        InputKind::List(inner) => Ok(InputKind::List(Box::new(mark_input_id(
            *inner, type_name, field_name,
        )?))),
        InputKind::Optional(inner) => Ok(InputKind::Optional(Box::new(mark_input_id(
            *inner, type_name, field_name,
        )?))),
        InputKind::Scalar { kind, .. } => Err(invalid_id_kind(type_name, field_name, kind.as_str())),
        InputKind::Time => Err(invalid_id_kind(type_name, field_name, "time")),
        InputKind::Enum { .. } => Err(invalid_id_kind(type_name, field_name, "enum")),
        InputKind::Object(_) => Err(SchemaBuildError::IdOnCompositeType {
            type_name: type_name.to_string(),
            field_name: field_name.to_string(),
        }),
    }
}

fn invalid_id_kind(type_name: &str, field_name: &str, kind: &str) -> SchemaBuildError {
    SchemaBuildError::InvalidIdKind {
        type_name: type_name.to_string(),
        field_name: field_name.to_string(),
        kind: kind.to_string(),
    }
}
