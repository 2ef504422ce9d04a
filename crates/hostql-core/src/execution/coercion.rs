//! Turns argument literals into host values and assigns them to argument
//! bundles.

use crate::host::ObjectValue;
use crate::host::ScalarKind;
use crate::host::Value;
use crate::types::InputField;
use crate::types::InputKind;
use crate::types::TypeRegistry;
use chrono::DateTime;
use chrono::Utc;
use hostql_parser::ast;
use std::any::Any;
use std::borrow::Cow;

type Result<T> = std::result::Result<T, String>;

/// Coerces `literal` for `field` and stores it in `target`. A `null` literal
/// leaves the field's default in place.
pub(crate) fn assign(
    registry: &TypeRegistry,
    field: &InputField,
    target: &mut dyn Any,
    literal: &ast::Value,
) -> Result<()> {
    if matches!(literal, ast::Value::Null) {
        return Ok(());
    }
    let value = coerce(registry, field.kind(), literal)?;
    if field.assign(target, value) {
        Ok(())
    } else {
        Err(format!("value cannot be assigned to `{}`", field.host_name()))
    }
}

pub(crate) fn coerce(
    registry: &TypeRegistry,
    kind: &InputKind,
    literal: &ast::Value,
) -> Result<Value<'static>> {
    match literal {
        ast::Value::Variable(name) => {
            return Err(format!("variables are not supported (found `${name}`)"));
        },
        ast::Value::Enum(label) => {
            return Err(format!("enum literals are not supported (found `{label}`)"));
        },
        _ => {},
    }

    match (kind, literal) {
        (InputKind::Optional(_), ast::Value::Null) => Ok(Value::Null),
        (InputKind::Optional(inner), literal) => coerce(registry, inner, literal),
        (_, ast::Value::Null) => Err("null is not allowed here".to_string()),
        (InputKind::Scalar { kind, is_id }, literal) => coerce_scalar(*kind, *is_id, literal),
        (InputKind::Enum { kind, .. }, literal) => coerce_scalar(*kind, false, literal),
        (InputKind::Time, ast::Value::String(text)) => DateTime::parse_from_rfc3339(text)
            .map(|time| Value::Time(time.with_timezone(&Utc)))
            .map_err(|err| format!("`{text}` is not an RFC 3339 time: {err}")),
        (InputKind::Time, other) => Err(mismatch("an RFC 3339 time string", other)),
        (InputKind::List(inner), ast::Value::List(items)) => items
            .iter()
            .map(|item| coerce(registry, inner, item))
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        (InputKind::List(_), other) => Err(mismatch("a list", other)),
        (InputKind::Object(name), ast::Value::Object(entries)) => {
            coerce_object(registry, name, entries)
        },
        (InputKind::Object(name), other) => Err(mismatch(&format!("a `{name}` object"), other)),
    }
}

fn coerce_scalar(kind: ScalarKind, is_id: bool, literal: &ast::Value) -> Result<Value<'static>> {
    match literal {
        ast::Value::String(text) if kind == ScalarKind::String => {
            Ok(Value::String(Cow::Owned(text.clone())))
        },
        ast::Value::Int(i) if kind == ScalarKind::String && is_id => {
            Ok(Value::String(Cow::Owned(i.to_string())))
        },
        ast::Value::Boolean(b) if kind == ScalarKind::Bool => Ok(Value::Bool(*b)),
        ast::Value::Int(i) if kind.is_int() => int_in_range(kind, i128::from(*i)),
        ast::Value::String(text) if kind.is_int() && is_id => match text.parse::<i128>() {
            Ok(parsed) => int_in_range(kind, parsed),
            Err(_) => Err(format!("`{text}` is not a valid integer ID")),
        },
        ast::Value::Float(f) if kind == ScalarKind::F32 => {
            if f.abs() > f64::from(f32::MAX) {
                Err(format!("{f} is out of range for {kind}"))
            } else {
                Ok(Value::Float(*f))
            }
        },
        ast::Value::Float(f) if kind.is_float() => Ok(Value::Float(*f)),
        other => Err(mismatch(expected(kind, is_id), other)),
    }
}

fn int_in_range(kind: ScalarKind, value: i128) -> Result<Value<'static>> {
    let Some((min, max)) = kind.int_bounds() else {
        return Err(format!("{kind} is not an integer kind"));
    };
    if value < min || value > max {
        return Err(format!("{value} is out of range for {kind}"));
    }
    let converted = if kind.is_unsigned_int() {
        u64::try_from(value).ok().map(Value::UInt)
    } else {
        i64::try_from(value).ok().map(Value::Int)
    };
    converted.ok_or_else(|| format!("{value} is out of range for {kind}"))
}

fn coerce_object(
    registry: &TypeRegistry,
    name: &str,
    entries: &indexmap::IndexMap<String, ast::Value>,
) -> Result<Value<'static>> {
    let Some(input) = registry.input(name) else {
        return Err(format!("unknown input type `{name}`"));
    };
    let mut object = input.construct();
    for (key, literal) in entries {
        let Some(field) = input.field(key) else {
            return Err(format!("unknown field `{key}` on input `{name}`"));
        };
        assign(registry, field, object.as_mut(), literal)
            .map_err(|err| format!("field `{key}`: {err}"))?;
    }
    Ok(Value::Object(ObjectValue::Owned(object)))
}

fn expected(kind: ScalarKind, is_id: bool) -> &'static str {
    match kind {
        _ if is_id => "a string or integer ID",
        ScalarKind::String => "a string",
        ScalarKind::Bool => "a boolean",
        ScalarKind::F32 | ScalarKind::F64 => "a float",
        _ => "an integer",
    }
}

fn mismatch(expected: &str, found: &ast::Value) -> String {
    format!("expected {expected}, found {}", found.kind_name())
}
