//! # Steem Wire Schema
//!
//! Schema-driven encoding of dynamic [`serde_json::Value`] input.
//!
//! Every encoder here has the shape `(sink, &Value) -> bytes written` and
//! implements [`steem_wire_core::Encoder<Value>`]. Schemas are composed from
//! primitives and combinators, built once, and reused. Coercion is strict:
//! numbers must be integral where an integer is expected, booleans must be
//! booleans, and keyed records must be JSON objects.
//!
//! The bytes produced match the typed encoders in `steem-wire-core` and
//! `steem-wire-protocol` for the same logical value.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use steem_wire_core::{Encoder, Sink};
//! use steem_wire_schema::{boxed, field, object, static_variant, string, uint8, void_t};
//!
//! let schema = static_variant([
//!     boxed(object([field("value", void_t)])),
//!     boxed(object([field("name", string), field("level", uint8)])),
//! ]);
//!
//! let mut sink = Sink::new();
//! schema.encode(&mut sink, &json!({ "type": 1, "name": "wat", "level": 7 })).unwrap();
//! assert_eq!(sink.to_hex(), "010377617407");
//! ```

pub mod combinator;
pub mod primitive;
pub mod protocol;
pub mod value;

pub use combinator::{
    array, boxed, field, map, object, optional, static_variant, void_t, Array, BoxedEncoder, Map,
    Object, Optional, StaticVariant,
};
pub use primitive::{
    boolean, bytes, date, float64, int16, int32, int64, int8, public_key, raw_string, string,
    svarint, uint16, uint32, uint8, uvarint,
};
pub use protocol::{asset, authority, beneficiary, chain_properties, price};
pub use value::{as_record, integer, kind};
