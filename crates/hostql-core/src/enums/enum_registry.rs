use crate::enums::EnumRegistrationError;
use crate::host::HostKind;
use crate::host::Reflect;
use crate::host::ScalarKind;
use crate::host::Value;
use hostql_parser::is_valid_name;
use indexmap::IndexMap;
use std::any::TypeId;
use std::collections::HashMap;

/// The underlying value of an enum label.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum EnumKey {
    Int(i64),
    UInt(u64),
    Str(String),
}

impl EnumKey {
    /// The key for a host value, or `None` for values that cannot back an
    /// enum.
    pub fn from_value(value: &Value<'_>) -> Option<Self> {
        match value {
            Value::Int(i) => Some(EnumKey::Int(*i)),
            Value::UInt(u) => Some(EnumKey::UInt(*u)),
            Value::String(s) => Some(EnumKey::Str(s.to_string())),
            _ => None,
        }
    }

    // Signed and unsigned host values compare by numeric value.
    fn normalized(self) -> Self {
        match self {
            EnumKey::Int(i) if i >= 0 => EnumKey::UInt(i as u64),
            other => other,
        }
    }
}

impl std::fmt::Display for EnumKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnumKey::Int(i) => write!(f, "{i}"),
            EnumKey::UInt(u) => write!(f, "{u}"),
            EnumKey::Str(s) => write!(f, "{s:?}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EnumType {
    name: String,
    type_id: TypeId,
    kind: ScalarKind,
    values_by_label: IndexMap<String, EnumKey>,
    labels_by_value: HashMap<EnumKey, String>,
}

impl EnumType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Scalar kind of the host type backing this enum.
    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.values_by_label.keys().map(String::as_str)
    }

    pub fn value(&self, label: &str) -> Option<&EnumKey> {
        self.values_by_label.get(label)
    }

    pub fn label(&self, value: &Value<'_>) -> Option<&str> {
        let key = EnumKey::from_value(value)?.normalized();
        self.labels_by_value.get(&key).map(String::as_str)
    }
}

/// Enums known to a schema, keyed by host type.
#[derive(Clone, Debug, Default)]
pub struct EnumRegistry {
    enums: IndexMap<TypeId, EnumType>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` as an enum with the given labels.
    ///
    /// Returns `Ok(false)` without registering anything when `entries` is
    /// empty.
    pub fn register<T, L>(
        &mut self,
        entries: impl IntoIterator<Item = (L, T)>,
    ) -> Result<bool, EnumRegistrationError>
    where
        T: Reflect,
        L: Into<String>,
    {
        let host_type = T::host_type();
        let entries: Vec<(String, T)> = entries
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .collect();
        if entries.is_empty() {
            return Ok(false);
        }

        let Some(name) = host_type.name().map(str::to_string) else {
            return Err(EnumRegistrationError::UnnamedType {
                rust_name: host_type.rust_name().to_string(),
            });
        };
        let kind = match host_type.kind() {
            HostKind::Scalar(kind) if kind.is_int() || *kind == ScalarKind::String => *kind,
            other => {
                return Err(EnumRegistrationError::UnsupportedKind {
                    name,
                    kind: other.describe().to_string(),
                });
            },
        };
        if self.enums.contains_key(&host_type.type_id())
            || self.enums.values().any(|existing| existing.name == name)
        {
            return Err(EnumRegistrationError::AlreadyRegistered { name });
        }

        let mut values_by_label: IndexMap<String, EnumKey> = IndexMap::with_capacity(entries.len());
        let mut labels_by_value: HashMap<EnumKey, String> = HashMap::with_capacity(entries.len());
        for (label, value) in entries {
            if !is_valid_name(&label) {
                return Err(EnumRegistrationError::InvalidLabel { name, label });
            }
            if values_by_label.contains_key(&label) {
                return Err(EnumRegistrationError::DuplicateLabel { name, label });
            }
            let value = value.into_value();
            let Some(key) = EnumKey::from_value(&value) else {
                return Err(EnumRegistrationError::UnsupportedValue {
                    name,
                    label,
                    kind: value.kind_name().to_string(),
                });
            };
            if let Some(first_label) = labels_by_value.get(&key.clone().normalized()) {
                return Err(EnumRegistrationError::DuplicateValue {
                    first_label: first_label.clone(),
                    second_label: label,
                    name,
                });
            }
            labels_by_value.insert(key.clone().normalized(), label.clone());
            values_by_label.insert(label, key);
        }

        log::debug!(
            "registered enum `{name}` with {} labels",
            values_by_label.len(),
        );
        self.enums.insert(host_type.type_id(), EnumType {
            name,
            type_id: host_type.type_id(),
            kind,
            values_by_label,
            labels_by_value,
        });
        Ok(true)
    }

    pub fn get(&self, name: &str) -> Option<&EnumType> {
        self.enums.values().find(|enum_type| enum_type.name == name)
    }

    pub fn get_by_type(&self, type_id: TypeId) -> Option<&EnumType> {
        self.enums.get(&type_id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnumType> {
        self.enums.values()
    }

    pub fn len(&self) -> usize {
        self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}
