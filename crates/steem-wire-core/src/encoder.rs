//! The encoder capability and typed combinators.
//!
//! Any `Fn(&mut Sink, &T) -> Result<usize>` is an [`Encoder<T>`], so the
//! primitive functions in this crate compose directly:
//!
//! ```
//! use steem_wire_core::{array, map, optional, string, uint16, Encoder, Sink};
//!
//! let mut sink = Sink::new();
//! let auths = map(string::<String>, uint16);
//! auths.encode(&mut sink, &vec![("alice".to_string(), 1u16)]).unwrap();
//! optional(array(uint16)).encode(&mut sink, &None::<Vec<u16>>).unwrap();
//! assert_eq!(sink.to_hex(), "0105616c696365010000");
//! ```

use std::marker::PhantomData;

use crate::error::Result;
use crate::sink::Sink;
use crate::varint::uvarint;

/// Something that writes values of type `T` into a [`Sink`].
pub trait Encoder<T: ?Sized> {
    /// Append the encoding of `value` and return the number of bytes written.
    fn encode(&self, sink: &mut Sink, value: &T) -> Result<usize>;
}

impl<T: ?Sized, F> Encoder<T> for F
where
    F: Fn(&mut Sink, &T) -> Result<usize>,
{
    fn encode(&self, sink: &mut Sink, value: &T) -> Result<usize> {
        self(sink, value)
    }
}

/// Encoder for sequences: `uvarint` count, then each element in order.
#[derive(Debug, Clone, Copy)]
pub struct Array<E> {
    element: E,
}

/// Build an [`Array`] encoder.
pub fn array<E>(element: E) -> Array<E> {
    Array { element }
}

impl<T, E: Encoder<T>> Encoder<[T]> for Array<E> {
    fn encode(&self, sink: &mut Sink, value: &[T]) -> Result<usize> {
        sink.atomic(|sink| {
            let mut len = uvarint(sink, &(value.len() as u64))?;
            for item in value {
                len += self.element.encode(sink, item)?;
            }
            Ok(len)
        })
    }
}

impl<T, E: Encoder<T>> Encoder<Vec<T>> for Array<E> {
    fn encode(&self, sink: &mut Sink, value: &Vec<T>) -> Result<usize> {
        Encoder::<[T]>::encode(self, sink, value.as_slice())
    }
}

/// Encoder for association lists: `uvarint` pair count, then key and value
/// of each pair in input order. Duplicates are kept.
#[derive(Debug, Clone, Copy)]
pub struct Map<K, V> {
    key: K,
    value: V,
}

/// Build a [`Map`] encoder.
pub fn map<K, V>(key: K, value: V) -> Map<K, V> {
    Map { key, value }
}

impl<A, B, K: Encoder<A>, V: Encoder<B>> Encoder<[(A, B)]> for Map<K, V> {
    fn encode(&self, sink: &mut Sink, pairs: &[(A, B)]) -> Result<usize> {
        sink.atomic(|sink| {
            let mut len = uvarint(sink, &(pairs.len() as u64))?;
            for (k, v) in pairs {
                len += self.key.encode(sink, k)?;
                len += self.value.encode(sink, v)?;
            }
            Ok(len)
        })
    }
}

impl<A, B, K: Encoder<A>, V: Encoder<B>> Encoder<Vec<(A, B)>> for Map<K, V> {
    fn encode(&self, sink: &mut Sink, pairs: &Vec<(A, B)>) -> Result<usize> {
        Encoder::<[(A, B)]>::encode(self, sink, pairs.as_slice())
    }
}

/// Encoder for optional values: `0` when absent, `1` then the value when
/// present. An empty but present value still gets the `1`.
#[derive(Debug, Clone, Copy)]
pub struct Optional<E> {
    element: E,
}

/// Build an [`Optional`] encoder.
pub fn optional<E>(element: E) -> Optional<E> {
    Optional { element }
}

impl<T, E: Encoder<T>> Encoder<Option<T>> for Optional<E> {
    fn encode(&self, sink: &mut Sink, value: &Option<T>) -> Result<usize> {
        match value {
            None => {
                sink.append(&[0])?;
                Ok(1)
            }
            Some(inner) => sink.atomic(|sink| {
                sink.append(&[1])?;
                Ok(1 + self.element.encode(sink, inner)?)
            }),
        }
    }
}

/// A discriminated union with a fixed, ordered list of alternatives.
///
/// Implemented by enums whose wire form is a small integer tag followed by
/// the selected alternative's own encoding.
pub trait Variant {
    /// Index of the alternative held by this value.
    fn tag(&self) -> u64;

    /// Encode the alternative's payload, without the tag.
    fn encode_payload(&self, sink: &mut Sink) -> Result<usize>;
}

/// Write `uvarint(tag)` followed by the variant's payload.
pub fn static_variant<V: Variant + ?Sized>(sink: &mut Sink, value: &V) -> Result<usize> {
    sink.atomic(|sink| {
        let tag = uvarint(sink, &value.tag())?;
        Ok(tag + value.encode_payload(sink)?)
    })
}

/// Adapts an encoder of `U` into an encoder of `T` through a projection.
///
/// Handy for feeding record fields to generic combinators.
pub struct Project<T: ?Sized, U: ?Sized, P, E> {
    project: P,
    inner: E,
    _marker: PhantomData<fn(&T, &U)>,
}

/// Build a [`Project`] encoder.
pub fn project<T, U, P, E>(project: P, inner: E) -> Project<T, U, P, E>
where
    T: ?Sized,
    U: ?Sized,
    P: Fn(&T) -> &U,
    E: Encoder<U>,
{
    Project {
        project,
        inner,
        _marker: PhantomData,
    }
}

impl<T, U, P, E> Encoder<T> for Project<T, U, P, E>
where
    T: ?Sized,
    U: ?Sized,
    P: Fn(&T) -> &U,
    E: Encoder<U>,
{
    fn encode(&self, sink: &mut Sink, value: &T) -> Result<usize> {
        self.inner.encode(sink, (self.project)(value))
    }
}
