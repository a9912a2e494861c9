//! Shape checks and coercions for dynamic values.
//!
//! A missing property reads as [`Value::Null`], so "absent" and "null" are
//! the same thing to every schema encoder.

use serde_json::{Map, Number, Value};
use steem_wire_core::{EncodeError, Result};

/// Stand-in for a property that is not present.
pub(crate) static ABSENT: Value = Value::Null;

/// Largest integer a double holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Short name of a value's JSON type, for error messages.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn mismatch(encoder: &'static str, expected: &'static str, got: &Value) -> EncodeError {
    EncodeError::TypeMismatch {
        encoder,
        expected,
        got: kind(got),
    }
}

/// Require a keyed record: a JSON object, not null, an array or a primitive.
pub fn as_record(value: &Value) -> Result<&Map<String, Value>> {
    match value {
        Value::Object(record) => Ok(record),
        other => {
            tracing::debug!(got = kind(other), "rejecting non-record value");
            Err(EncodeError::NotARecord { got: kind(other) })
        }
    }
}

/// Read a property, treating a missing one as null.
pub(crate) fn property<'a>(record: &'a Map<String, Value>, name: &str) -> &'a Value {
    record.get(name).unwrap_or(&ABSENT)
}

/// Attach a field name to an error raised while encoding that field.
pub(crate) fn in_field<T>(name: &str, result: Result<T>) -> Result<T> {
    result.map_err(|source| EncodeError::Field {
        field: name.to_string(),
        source: Box::new(source),
    })
}

/// Coerce a JSON number to an integer of type `T`.
///
/// Integral floats are accepted within ±(2^53 - 1), where they are exact.
/// Non-integers are a type mismatch; integers that do not fit `T` are out
/// of range.
pub fn integer<T: TryFrom<i128>>(encoder: &'static str, value: &Value) -> Result<T> {
    let Value::Number(number) = value else {
        return Err(mismatch(encoder, "integer", value));
    };
    let wide = exact_integer(number).ok_or_else(|| {
        if number.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0) {
            EncodeError::out_of_range(encoder, number)
        } else {
            mismatch(encoder, "integer", value)
        }
    })?;
    T::try_from(wide).map_err(|_| EncodeError::out_of_range(encoder, number))
}

fn exact_integer(number: &Number) -> Option<i128> {
    if let Some(i) = number.as_i64() {
        return Some(i.into());
    }
    if let Some(u) = number.as_u64() {
        return Some(u.into());
    }
    let f = number.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        Some(f as i128)
    } else {
        None
    }
}

pub(crate) fn as_str<'a>(encoder: &'static str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| mismatch(encoder, "string", value))
}

/// Byte block given as a hex string or an array of byte values.
pub(crate) fn byte_block(encoder: &'static str, value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::String(text) => hex::decode(text).map_err(|_| mismatch(encoder, "hex string", value)),
        Value::Array(items) => items.iter().map(|item| integer::<u8>(encoder, item)).collect(),
        other => Err(mismatch(encoder, "hex string or byte array", other)),
    }
}
