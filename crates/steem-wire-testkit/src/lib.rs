//! # Steem Wire Testkit
//!
//! Testing utilities for the Steem wire encoder.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Reference byte sequences every encoder change must reproduce
//! - **UTF-16 corpus**: Adversarial text, unpaired surrogates included
//! - **Generators**: Proptest strategies for protocol records and raw inputs
//! - **Fixtures**: Deterministic keys and ready-made records
//!
//! ## Golden Vectors
//!
//! ```rust
//! use steem_wire_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, hex) in verify_all_vectors() {
//!     assert!(matches, "{name}: {hex}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use steem_wire_testkit::generators::RecordParams;
//!
//! proptest! {
//!     #[test]
//!     fn authority_encoding_is_deterministic(records: RecordParams) {
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use steem_wire_core::Sink;
//! use steem_wire_protocol::authority;
//! use steem_wire_testkit::fixtures::reference_authority;
//!
//! let mut sink = Sink::new();
//! authority(&mut sink, &reference_authority()).unwrap();
//! assert_eq!(sink.len(), 91);
//! ```

pub mod corpus;
pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use corpus::{utf16_corpus, verify_corpus, Utf16Case};
pub use fixtures::{multisig_authority, party_keys, reference_authority, stm_public_key};
pub use generators::RecordParams;
pub use vectors::{all_vectors, encode_vector, verify_all_vectors, GoldenVector};
