use crate::host::Getter;
use crate::host::Invoker;
use crate::host::Reflect;
use crate::host::Setter;
use crate::host::Signature;
use std::any::Any;
use std::any::TypeId;

/// Deferred access to another type's description.
///
/// Field and signature types are stored as function pointers rather than
/// evaluated descriptions so that self-referential types can be described.
pub type TypeFn = fn() -> HostType;

/// The description of one host type.
#[derive(Clone)]
pub struct HostType {
    pub(crate) type_id: TypeId,
    pub(crate) rust_name: &'static str,
    pub(crate) name: Option<String>,
    pub(crate) kind: HostKind,
}

impl HostType {
    pub(crate) fn of<T: Any>(name: Option<String>, kind: HostKind) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            rust_name: std::any::type_name::<T>(),
            name,
            kind,
        }
    }

    /// A scalar host type. Chain [`named()`](Self::named) to give it a name,
    /// which is required before it can be registered as an enum.
    pub fn scalar<T: Reflect>(kind: ScalarKind) -> Self {
        Self::of::<T>(None, HostKind::Scalar(kind))
    }

    /// A host type the engine cannot represent. Reaching one from a root is
    /// a build error naming `what`.
    pub fn unsupported<T: Reflect>(what: &'static str) -> Self {
        Self::of::<T>(None, HostKind::Unsupported(what))
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn rust_name(&self) -> &'static str {
        self.rust_name
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> &HostKind {
        &self.kind
    }

    /// Name used in error messages: the declared name if any, else the Rust
    /// type path.
    pub(crate) fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.rust_name)
    }
}

impl std::fmt::Debug for HostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostType")
            .field("rust_name", &self.rust_name)
            .field("name", &self.name)
            .field("kind", &self.kind.describe())
            .finish()
    }
}

#[derive(Clone)]
pub enum HostKind {
    Scalar(ScalarKind),
    Time,
    List(TypeFn),
    Optional(TypeFn),
    Struct(StructDecl),
    Interface(InterfaceDecl),
    /// [`ResolverContext`](crate::host::ResolverContext): only legal as a
    /// resolver input.
    Context,
    /// [`ResolverError`](crate::host::ResolverError): only legal as a
    /// resolver output.
    ErrorMarker,
    /// [`IsId`](crate::host::IsId): only legal as a resolver output.
    IdMarker,
    Unsupported(&'static str),
}

impl HostKind {
    pub fn describe(&self) -> &'static str {
        match self {
            HostKind::Scalar(kind) => kind.as_str(),
            HostKind::Time => "time",
            HostKind::List(_) => "list",
            HostKind::Optional(_) => "optional",
            HostKind::Struct(_) => "struct",
            HostKind::Interface(_) => "interface",
            HostKind::Context => "resolver context",
            HostKind::ErrorMarker => "resolver error",
            HostKind::IdMarker => "id marker",
            HostKind::Unsupported(what) => what,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    String,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::Isize => "isize",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::Usize => "usize",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
        }
    }

    pub fn is_signed_int(&self) -> bool {
        matches!(
            self,
            ScalarKind::I8
                | ScalarKind::I16
                | ScalarKind::I32
                | ScalarKind::I64
                | ScalarKind::Isize,
        )
    }

    pub fn is_unsigned_int(&self) -> bool {
        matches!(
            self,
            ScalarKind::U8
                | ScalarKind::U16
                | ScalarKind::U32
                | ScalarKind::U64
                | ScalarKind::Usize,
        )
    }

    pub fn is_int(&self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    pub fn is_float(&self) -> bool {
        matches!(self, ScalarKind::F32 | ScalarKind::F64)
    }

    /// Inclusive range of an integer kind.
    pub fn int_bounds(&self) -> Option<(i128, i128)> {
        let bounds = match self {
            ScalarKind::I8 => (i8::MIN as i128, i8::MAX as i128),
            ScalarKind::I16 => (i16::MIN as i128, i16::MAX as i128),
            ScalarKind::I32 => (i32::MIN as i128, i32::MAX as i128),
            ScalarKind::I64 => (i64::MIN as i128, i64::MAX as i128),
            ScalarKind::Isize => (isize::MIN as i128, isize::MAX as i128),
            ScalarKind::U8 => (0, u8::MAX as i128),
            ScalarKind::U16 => (0, u16::MAX as i128),
            ScalarKind::U32 => (0, u32::MAX as i128),
            ScalarKind::U64 => (0, u64::MAX as i128),
            ScalarKind::Usize => (0, usize::MAX as i128),
            _ => return None,
        };
        Some(bounds)
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields and methods of a struct type, in declaration order.
#[derive(Clone, Default)]
pub struct StructDecl {
    pub(crate) fields: Vec<HostField>,
    pub(crate) methods: Vec<HostMethod>,
    pub(crate) construct: Option<fn() -> Box<dyn Any>>,
}

impl StructDecl {
    pub fn fields(&self) -> &[HostField] {
        &self.fields
    }

    pub fn methods(&self) -> &[HostMethod] {
        &self.methods
    }

    pub fn is_constructible(&self) -> bool {
        self.construct.is_some()
    }
}

#[derive(Clone)]
pub struct HostField {
    pub(crate) name: String,
    pub(crate) tag: Option<String>,
    pub(crate) embedded: bool,
    pub(crate) kind: HostFieldKind,
}

impl HostField {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    pub fn kind(&self) -> &HostFieldKind {
        &self.kind
    }
}

#[derive(Clone)]
pub enum HostFieldKind {
    /// A stored value. Output types need the getter, input types need the
    /// setter.
    Data {
        ty: TypeFn,
        getter: Option<Getter>,
        setter: Option<Setter>,
    },
    /// A function-valued field. Always exposed as a resolver.
    Func {
        signature: Signature,
        invoker: Invoker,
    },
}

/// A method in a type's method set.
///
/// Only methods with an invoker can be exposed as resolvers; the rest exist
/// so interface satisfaction can be checked against the full method set.
#[derive(Clone)]
pub struct HostMethod {
    pub(crate) name: String,
    pub(crate) signature: Signature,
    pub(crate) invoker: Option<Invoker>,
}

impl HostMethod {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

#[derive(Clone, Default)]
pub struct InterfaceDecl {
    pub(crate) methods: Vec<HostMethod>,
    pub(crate) implementations: Vec<TypeFn>,
}

impl InterfaceDecl {
    pub fn methods(&self) -> &[HostMethod] {
        &self.methods
    }

    pub fn implementations(&self) -> &[TypeFn] {
        &self.implementations
    }
}
