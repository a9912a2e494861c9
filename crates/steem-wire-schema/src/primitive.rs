//! Primitive encoders over dynamic values.
//!
//! Each one coerces its input to the matching typed value and delegates to
//! the core encoder, so the bytes are identical to the typed layer.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use steem_wire_core::{self as wire, EncodeError, Result, Sink};
use steem_wire_protocol::RawPublicKey;

use crate::value::{as_str, byte_block, integer, mismatch};

macro_rules! integer_encoder {
    ($($name:ident: $ty:ty),* $(,)?) => {$(
        #[doc = concat!("`", stringify!($name), "` from a JSON number.")]
        pub fn $name(sink: &mut Sink, value: &Value) -> Result<usize> {
            let n: $ty = integer(stringify!($name), value)?;
            wire::$name(sink, &n)
        }
    )*};
}

integer_encoder! {
    uint8: u8,
    int8: i8,
    uint16: u16,
    int16: i16,
    uint32: u32,
    int32: i32,
    int64: i64,
    uvarint: u64,
    svarint: i64,
}

pub fn float64(sink: &mut Sink, value: &Value) -> Result<usize> {
    let n = value
        .as_f64()
        .ok_or_else(|| mismatch("float64", "number", value))?;
    wire::float64(sink, &n)
}

/// Strictly a JSON boolean; truthiness is not inferred.
pub fn boolean(sink: &mut Sink, value: &Value) -> Result<usize> {
    let b = value
        .as_bool()
        .ok_or_else(|| mismatch("boolean", "boolean", value))?;
    wire::boolean(sink, &b)
}

pub fn string(sink: &mut Sink, value: &Value) -> Result<usize> {
    wire::string(sink, as_str("string", value)?)
}

pub fn raw_string(sink: &mut Sink, value: &Value) -> Result<usize> {
    wire::raw_string(sink, as_str("raw_string", value)?)
}

/// Byte block from a hex string or an array of byte values.
pub fn bytes(sink: &mut Sink, value: &Value) -> Result<usize> {
    wire::bytes(sink, &byte_block("bytes", value)?)
}

/// Date from epoch seconds, `YYYY-MM-DDTHH:MM:SS` (read as UTC), or RFC 3339.
pub fn date(sink: &mut Sink, value: &Value) -> Result<usize> {
    let when = match value {
        Value::Number(_) => {
            let secs: i64 = integer("date", value)?;
            DateTime::<Utc>::from_timestamp(secs, 0)
                .ok_or_else(|| EncodeError::out_of_range("date", secs))?
        }
        Value::String(text) => parse_date(text)?,
        other => return Err(mismatch("date", "date string or epoch seconds", other)),
    };
    wire::date(sink, &when)
}

fn parse_date(text: &str) -> Result<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    DateTime::parse_from_rfc3339(text)
        .map(|when| when.with_timezone(&Utc))
        .map_err(|e| EncodeError::InvalidDate(format!("{text:?}: {e}")))
}

/// Public key from its raw bytes, given as hex or a byte array.
pub fn public_key(sink: &mut Sink, value: &Value) -> Result<usize> {
    let raw = byte_block("public_key", value)?;
    if raw.is_empty() {
        return Err(EncodeError::InvalidKey("empty key".into()));
    }
    steem_wire_protocol::public_key(sink, &RawPublicKey(raw))
}
