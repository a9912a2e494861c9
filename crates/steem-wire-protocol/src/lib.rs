//! # Steem Wire Protocol
//!
//! Fixed-shape Steem records and their encoders, built from the primitives
//! in `steem-wire-core`.
//!
//! ## Key Types
//!
//! - [`Asset`] - Amount, precision and symbol, always 16 bytes on the wire
//! - [`Authority`] - Weighted account and key sets
//! - [`Beneficiary`] - Reward routing entry
//! - [`PublicKeyBytes`] - Seam to the key-handling layer
//!
//! ## Example
//!
//! ```
//! use steem_wire_core::Sink;
//! use steem_wire_protocol::{asset, Asset};
//!
//! let mut sink = Sink::new();
//! asset(&mut sink, &Asset::new(12345, 3, "SBD")).unwrap();
//! assert_eq!(sink.to_hex(), "39300000000000000353424400000000");
//! ```

pub mod crypto;
pub mod encode;
pub mod types;

pub use crypto::{PublicKeyBytes, RawPublicKey};
pub use encode::{
    asset, authority, beneficiary, chain_properties, price, public_key, ASSET_SYMBOL_WIDTH,
};
pub use types::{Asset, Authority, Beneficiary, ChainProperties, Price};
