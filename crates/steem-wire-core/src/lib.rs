//! # Steem Wire Core
//!
//! Pure primitives for the Steem wire encoder: the byte sink, fixed-width
//! integers, base-128 varints, and UTF-8 accounting.
//!
//! This crate does no I/O. Encoders are plain functions
//! `(sink, value) -> bytes written` whose only side effect is appending to
//! the sink.
//!
//! ## Key Types
//!
//! - [`Sink`] - Append-only output buffer, finalized into [`bytes::Bytes`]
//! - [`Encoder`] - The capability every encoder and combinator implements
//! - [`EncodeError`] - Range, shape, type and state failures
//!
//! ## Example
//!
//! ```
//! use steem_wire_core::{string, uint32, uvarint, Sink};
//!
//! let mut sink = Sink::new();
//! uint32(&mut sink, &16777216).unwrap();
//! uvarint(&mut sink, &300).unwrap();
//! string(&mut sink, "wat").unwrap();
//! assert_eq!(sink.to_hex(), "00000001ac0203776174");
//! ```

pub mod encoder;
pub mod error;
pub mod primitive;
pub mod sink;
pub mod utf8;
pub mod varint;

pub use encoder::{
    array, map, optional, project, static_variant, Array, Encoder, Map, Optional, Project,
    Variant,
};
pub use error::{EncodeError, ErrorCategory, Result};
pub use primitive::{
    boolean, bytes, date, float64, int16, int16_with, int32, int32_with, int64, int8, uint16,
    uint16_with, uint32, uint32_with, uint8, void, Endian, MAX_BYTES_LEN,
};
pub use sink::{Sink, SinkConfig};
pub use utf8::{
    code_point_at, raw_string, raw_wide_string, replace_lone_surrogate, string, ucs_to_utf8,
    utf8_length, utf8_width, wide_string,
};
pub use varint::{svarint, uvarint, uvarint_len, zigzag, MAX_UVARINT_LEN};
