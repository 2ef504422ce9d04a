//! Writing host values as JSON into a reusable `String` buffer.

use crate::host::ScalarKind;
use crate::host::Value;
use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use std::fmt::Write;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot encode non-finite float `{value}`")]
    NonFiniteFloat {
        value: f64,
    },

    #[error("expected a {expected} value, found {found}")]
    KindMismatch {
        expected: ScalarKind,
        found: &'static str,
    },
}

/// Writes `value` as a quoted, escaped JSON string.
pub fn write_str(out: &mut String, value: &str) {
    match serde_json::to_string(value) {
        Ok(quoted) => out.push_str(&quoted),
        Err(_) => out.push_str("null"),
    }
}

/// Writes a scalar value. ID values are always written as strings.
pub fn write_scalar(
    out: &mut String,
    value: &Value<'_>,
    kind: ScalarKind,
    is_id: bool,
) -> Result<(), EncodeError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::String(s) if kind == ScalarKind::String => write_str(out, s),
        Value::Bool(b) if kind == ScalarKind::Bool => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) if kind.is_int() => write_int(out, *i, is_id),
        Value::UInt(u) if kind.is_int() => write_int(out, *u, is_id),
        Value::Float(f) if kind.is_float() => write_float(out, *f, kind)?,
        other => {
            return Err(EncodeError::KindMismatch {
                expected: kind,
                found: other.kind_name(),
            });
        },
    }
    Ok(())
}

fn write_int(out: &mut String, value: impl std::fmt::Display, quoted: bool) {
    let _ = if quoted {
        write!(out, "\"{value}\"")
    } else {
        write!(out, "{value}")
    };
}

/// Writes the shortest decimal text that reads back as the same float
/// (as an `f32` for [`ScalarKind::F32`]). Exponent notation is only used for
/// magnitudes of at least 1e21 or below 1e-6.
pub fn write_float(out: &mut String, value: f64, kind: ScalarKind) -> Result<(), EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::NonFiniteFloat { value });
    }
    let magnitude = value.abs();
    let exponent = magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude);
    let single = kind == ScalarKind::F32;
    match (single, exponent) {
        (true, false) => {
            let _ = write!(out, "{}", value as f32);
        },
        (false, false) => {
            let _ = write!(out, "{value}");
        },
        (true, true) => push_exponent(out, &format!("{:e}", value as f32)),
        (false, true) => push_exponent(out, &format!("{value:e}")),
    }
    Ok(())
}

// `1e21` -> `1e+21`
fn push_exponent(out: &mut String, formatted: &str) {
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => {
            out.push_str(mantissa);
            out.push_str("e+");
            out.push_str(exp);
        },
        _ => out.push_str(formatted),
    }
}

/// Writes a time as an RFC 3339 string in UTC.
pub fn write_time(out: &mut String, value: &DateTime<Utc>) {
    write_str(out, &value.to_rfc3339_opts(SecondsFormat::AutoSi, true));
}
