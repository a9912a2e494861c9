//! # Steem Wire
//!
//! Deterministic binary encoding of Steem transactions and protocol
//! objects, for signing and broadcast.
//!
//! ## Overview
//!
//! Encoders append bytes to a [`Sink`] and report how many they wrote.
//! The same logical value always produces the same bytes.
//!
//! - **Typed**: native Rust values through plain functions and combinators
//! - **Schema**: dynamic `serde_json::Value` input through schemas built once
//! - **Protocol records**: assets, authorities, beneficiaries, prices and
//!   chain properties in both forms
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use steem_wire::protocol::{Asset, Beneficiary};
//! use steem_wire::{array, encode, schema};
//!
//! let typed = vec![Beneficiary { account: "alice".into(), weight: 10000 }];
//! let bytes = encode(array(steem_wire::protocol::beneficiary), &typed).unwrap();
//!
//! let dynamic = json!([{ "account": "alice", "weight": 10000 }]);
//! let same = encode(schema::array(schema::beneficiary), &dynamic).unwrap();
//! assert_eq!(bytes, same);
//!
//! let fee = encode(steem_wire::protocol::asset, &Asset::new(3000, 3, "STEEM")).unwrap();
//! assert_eq!(fee.len(), 16);
//! ```
//!
//! ## Re-exports
//!
//! - `steem_wire::core` - Sink, primitives, varints, UTF-8, typed combinators
//! - `steem_wire::protocol` - Public keys and protocol records
//! - `steem_wire::schema` - Encoders over dynamic values

pub use steem_wire_core as core;
pub use steem_wire_protocol as protocol;
pub use steem_wire_schema as schema;

pub use steem_wire_core::{
    array, map, optional, static_variant, EncodeError, Encoder, ErrorCategory, Result, Sink,
    SinkConfig, Variant,
};

use bytes::Bytes;

/// Encode one value into a fresh sink and return the finalized bytes.
pub fn encode<T, E>(encoder: E, value: &T) -> Result<Bytes>
where
    T: ?Sized,
    E: Encoder<T>,
{
    let mut sink = Sink::new();
    encoder.encode(&mut sink, value)?;
    sink.finalize()
}
