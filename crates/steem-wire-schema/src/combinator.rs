//! Composite encoders over dynamic values.
//!
//! Schemas are built once from these pieces and reused. Every composite
//! writes through [`Sink::atomic`], so a rejected value leaves the sink as
//! it was.

use serde_json::Value;
use steem_wire_core::{self as wire, EncodeError, Encoder, Result, Sink};

use crate::value::{as_record, in_field, integer, kind, mismatch, property};

/// A type-erased schema encoder.
pub type BoxedEncoder = Box<dyn Encoder<Value> + Send + Sync>;

/// Erase an encoder's type so it can sit in a schema.
pub fn boxed<E>(encoder: E) -> BoxedEncoder
where
    E: Encoder<Value> + Send + Sync + 'static,
{
    Box::new(encoder)
}

/// One named field of an [`object`] schema.
pub fn field<E>(name: &str, encoder: E) -> (String, BoxedEncoder)
where
    E: Encoder<Value> + Send + Sync + 'static,
{
    (name.to_string(), boxed(encoder))
}

/// Counted sequence from a JSON array. See [`array`].
pub struct Array<E>(wire::Array<E>);

/// Encode a JSON array as a `uvarint` count followed by each element.
pub fn array<E: Encoder<Value>>(element: E) -> Array<E> {
    Array(wire::array(element))
}

impl<E: Encoder<Value>> Encoder<Value> for Array<E> {
    fn encode(&self, sink: &mut Sink, value: &Value) -> Result<usize> {
        let Value::Array(items) = value else {
            return Err(mismatch("array", "array", value));
        };
        self.0.encode(sink, items.as_slice())
    }
}

/// Counted pair list from a JSON array of `[key, value]` arrays. See [`map`].
pub struct Map<K, V> {
    key: K,
    value: V,
}

/// Encode an ordered list of `[key, value]` pairs as a `uvarint` count
/// followed by each key and value.
///
/// JSON objects are not accepted here: their key order is not preserved.
pub fn map<K: Encoder<Value>, V: Encoder<Value>>(key: K, value: V) -> Map<K, V> {
    Map { key, value }
}

impl<K: Encoder<Value>, V: Encoder<Value>> Encoder<Value> for Map<K, V> {
    fn encode(&self, sink: &mut Sink, value: &Value) -> Result<usize> {
        let Value::Array(entries) = value else {
            return Err(mismatch("map", "array of [key, value] pairs", value));
        };
        let pairs = entries
            .iter()
            .map(|entry| match entry.as_array().map(Vec::as_slice) {
                Some([k, v]) => Ok((k, v)),
                _ => Err(mismatch("map", "[key, value] pair", entry)),
            })
            .collect::<Result<Vec<_>>>()?;

        sink.atomic(|sink| {
            let mut len = wire::uvarint(sink, &(pairs.len() as u64))?;
            for (k, v) in pairs {
                len += self.key.encode(sink, k)?;
                len += self.value.encode(sink, v)?;
            }
            Ok(len)
        })
    }
}

/// Presence-flagged value where null or absent means "not present". See [`optional`].
pub struct Optional<E>(E);

/// Encode null as `0`, anything else as `1` followed by the element.
pub fn optional<E: Encoder<Value>>(element: E) -> Optional<E> {
    Optional(element)
}

impl<E: Encoder<Value>> Encoder<Value> for Optional<E> {
    fn encode(&self, sink: &mut Sink, value: &Value) -> Result<usize> {
        if value.is_null() {
            return wire::uint8(sink, &0);
        }
        sink.atomic(|sink| Ok(wire::uint8(sink, &1)? + self.0.encode(sink, value)?))
    }
}

/// Record encoder: named fields in a fixed order. See [`object`].
pub struct Object {
    fields: Vec<(String, BoxedEncoder)>,
}

/// Encode a JSON object by writing each schema field in schema order.
///
/// Only the schema decides what is written: properties the schema does not
/// name are ignored, and a missing property is handed to its encoder as
/// null. Errors from a field are wrapped in [`EncodeError::Field`].
///
/// ```
/// use serde_json::json;
/// use steem_wire_core::{Encoder, Sink};
/// use steem_wire_schema::{field, object, string, uint8};
///
/// let schema = object([field("name", string), field("age", uint8)]);
/// let mut sink = Sink::new();
/// schema.encode(&mut sink, &json!({ "age": 30, "name": "bob" })).unwrap();
/// assert_eq!(sink.to_hex(), "03626f621e");
/// ```
pub fn object<I>(schema: I) -> Object
where
    I: IntoIterator<Item = (String, BoxedEncoder)>,
{
    Object {
        fields: schema.into_iter().collect(),
    }
}

impl Object {
    /// Field names in wire order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl Encoder<Value> for Object {
    fn encode(&self, sink: &mut Sink, value: &Value) -> Result<usize> {
        let record = as_record(value)?;
        sink.atomic(|sink| {
            let mut len = 0;
            for (name, encoder) in &self.fields {
                len += in_field(name, (**encoder).encode(sink, property(record, name)))?;
            }
            Ok(len)
        })
    }
}

/// Placeholder that writes nothing. Only null or absent is accepted.
pub fn void_t(_sink: &mut Sink, value: &Value) -> Result<usize> {
    if value.is_null() {
        Ok(0)
    } else {
        Err(EncodeError::NotVoid { got: kind(value) })
    }
}

/// Tagged union over positional alternatives. See [`static_variant`].
pub struct StaticVariant {
    alternatives: Vec<BoxedEncoder>,
}

/// Encode a record carrying a `type` discriminant.
///
/// The discriminant is an index into `alternatives`. It is written as a
/// `uvarint`, then the whole record (including `type`) is handed to the
/// selected alternative.
pub fn static_variant<I>(alternatives: I) -> StaticVariant
where
    I: IntoIterator<Item = BoxedEncoder>,
{
    StaticVariant {
        alternatives: alternatives.into_iter().collect(),
    }
}

impl StaticVariant {
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl Encoder<Value> for StaticVariant {
    fn encode(&self, sink: &mut Sink, value: &Value) -> Result<usize> {
        let record = as_record(value)?;
        let tag = property(record, "type");
        if tag.is_null() {
            tracing::debug!("variant value has no discriminant");
            return Err(EncodeError::MissingDiscriminant);
        }

        let count = self.alternatives.len();
        let index = integer::<usize>("static_variant", tag)
            .ok()
            .filter(|index| *index < count)
            .ok_or_else(|| {
                tracing::debug!(%tag, count, "variant discriminant rejected");
                EncodeError::InvalidDiscriminant {
                    tag: tag.to_string(),
                    count,
                }
            })?;

        sink.atomic(|sink| {
            let alternative = &*self.alternatives[index];
            Ok(wire::uvarint(sink, &(index as u64))? + alternative.encode(sink, value)?)
        })
    }
}
