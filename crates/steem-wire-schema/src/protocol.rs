//! Schema encoders for protocol records.
//!
//! Records are read from JSON objects shaped like the serde form of the
//! types in `steem_wire_protocol`, and produce the same bytes.

use std::sync::OnceLock;

use serde_json::Value;
use steem_wire_core::{Encoder, Result, Sink};
use steem_wire_protocol::Asset;

use crate::combinator::{field, map, object, Object};
use crate::primitive::{public_key, string, uint16, uint32};
use crate::value::{as_record, as_str, in_field, integer, property};

/// Encode an asset from `{ amount, precision, symbol }`. All three are required.
pub fn asset(sink: &mut Sink, value: &Value) -> Result<usize> {
    let record = as_record(value)?;
    let amount = in_field("amount", integer("int64", property(record, "amount")))?;
    let precision = in_field("precision", integer("uint8", property(record, "precision")))?;
    let symbol = in_field("symbol", as_str("string", property(record, "symbol")))?;
    steem_wire_protocol::asset(sink, &Asset::new(amount, precision, symbol))
}

fn authority_schema() -> &'static Object {
    static SCHEMA: OnceLock<Object> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        object([
            field("weight_threshold", uint32),
            field("account_auths", map(string, uint16)),
            field("key_auths", map(public_key, uint16)),
        ])
    })
}

/// Encode an authority from `{ weight_threshold, account_auths, key_auths }`.
///
/// Both auth lists are arrays of `[name_or_key, weight]` pairs, kept in the
/// order given. Keys are raw bytes as hex.
pub fn authority(sink: &mut Sink, value: &Value) -> Result<usize> {
    authority_schema().encode(sink, value)
}

fn beneficiary_schema() -> &'static Object {
    static SCHEMA: OnceLock<Object> = OnceLock::new();
    SCHEMA.get_or_init(|| object([field("account", string), field("weight", uint16)]))
}

pub fn beneficiary(sink: &mut Sink, value: &Value) -> Result<usize> {
    beneficiary_schema().encode(sink, value)
}

fn price_schema() -> &'static Object {
    static SCHEMA: OnceLock<Object> = OnceLock::new();
    SCHEMA.get_or_init(|| object([field("base", asset), field("quote", asset)]))
}

pub fn price(sink: &mut Sink, value: &Value) -> Result<usize> {
    price_schema().encode(sink, value)
}

fn chain_properties_schema() -> &'static Object {
    static SCHEMA: OnceLock<Object> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        object([
            field("account_creation_fee", asset),
            field("maximum_block_size", uint32),
            field("sbd_interest_rate", uint16),
        ])
    })
}

pub fn chain_properties(sink: &mut Sink, value: &Value) -> Result<usize> {
    chain_properties_schema().encode(sink, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use steem_wire_core::{EncodeError, ErrorCategory};
    use steem_wire_protocol::{Authority, Beneficiary, ChainProperties, Price, RawPublicKey};

    const STM_KEY_HEX: &str = "cac96c8360a74b0b19c65d16c15f9bedae40e389b02706890d1268993a61891243cf1937c1ebfffae69049cd46a0fea4614edf3870056bbcadf72df15a9f49c2";

    #[test]
    fn test_asset() {
        let mut sink = Sink::new();
        let value = json!({ "amount": 12345, "precision": 3, "symbol": "SBD" });
        assert_eq!(asset(&mut sink, &value).unwrap(), 16);
        assert_eq!(
            sink.as_bytes(),
            &[57, 48, 0, 0, 0, 0, 0, 0, 3, 83, 66, 68, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_asset_requires_every_field() {
        for missing in ["amount", "precision", "symbol"] {
            let mut value = json!({ "amount": 1, "precision": 3, "symbol": "SBD" });
            value.as_object_mut().unwrap().remove(missing);
            let err = asset(&mut Sink::new(), &value).unwrap_err();
            match &err {
                EncodeError::Field { field, .. } => assert_eq!(field, missing),
                other => panic!("expected field error, got {other:?}"),
            }
            assert_eq!(err.category(), ErrorCategory::Type);
        }
    }

    #[test]
    fn test_asset_symbol_too_long() {
        let value = json!({ "amount": 99999, "precision": 3, "symbol": "foobarb" });
        let err = asset(&mut Sink::new(), &value).unwrap_err();
        assert!(matches!(err, EncodeError::FieldTooLong { len: 7, .. }));
    }

    #[test]
    fn test_authority() {
        let value = json!({
            "weight_threshold": 99999,
            "account_auths": [["goldibex", 5], ["sneak", 10]],
            "key_auths": [[STM_KEY_HEX, 1]],
        });
        let mut sink = Sink::new();
        authority(&mut sink, &value).unwrap();

        let mut expected = vec![
            159, 134, 1, 0, 2, 8, 103, 111, 108, 100, 105, 98, 101, 120, 5, 0, 5, 115, 110, 101,
            97, 107, 10, 0, 1,
        ];
        expected.extend(hex::decode(STM_KEY_HEX).unwrap());
        expected.extend([1, 0]);
        assert_eq!(sink.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_authority_bad_key_names_field() {
        let value = json!({
            "weight_threshold": 1,
            "account_auths": [],
            "key_auths": [["not hex", 1]],
        });
        let mut sink = Sink::new();
        let err = authority(&mut sink, &value).unwrap_err();
        assert!(matches!(&err, EncodeError::Field { field, .. } if field == "key_auths"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_beneficiary() {
        let mut sink = Sink::new();
        beneficiary(&mut sink, &json!({ "account": "goldibex", "weight": 255 })).unwrap();
        assert_eq!(
            sink.as_bytes(),
            &[8, 103, 111, 108, 100, 105, 98, 101, 120, 255, 0]
        );
    }

    fn same_bytes(
        typed: impl FnOnce(&mut Sink) -> Result<usize>,
        dynamic: impl FnOnce(&mut Sink) -> Result<usize>,
    ) {
        let mut a = Sink::new();
        let mut b = Sink::new();
        assert_eq!(typed(&mut a).unwrap(), dynamic(&mut b).unwrap());
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_typed_and_schema_agree_on_records() {
        let auth = Authority::new(2)
            .with_account("alice", 1)
            .with_key(RawPublicKey::from_hex(STM_KEY_HEX).unwrap(), 1);
        let json = serde_json::to_value(&auth).unwrap();
        same_bytes(
            |s| steem_wire_protocol::authority(s, &auth),
            |s| authority(s, &json),
        );

        let price_value = Price {
            base: Asset::new(1000, 3, "SBD"),
            quote: Asset::new(4000, 3, "STEEM"),
        };
        let json = serde_json::to_value(&price_value).unwrap();
        same_bytes(
            |s| steem_wire_protocol::price(s, &price_value),
            |s| price(s, &json),
        );

        let props = ChainProperties {
            account_creation_fee: Asset::new(1, 3, "STEEM"),
            maximum_block_size: 65536,
            sbd_interest_rate: 1000,
        };
        let json = serde_json::to_value(&props).unwrap();
        same_bytes(
            |s| steem_wire_protocol::chain_properties(s, &props),
            |s| chain_properties(s, &json),
        );
    }

    proptest! {
        #[test]
        fn prop_asset_schema_matches_typed(
            amount in any::<i64>(),
            precision in any::<u8>(),
            symbol in "[A-Z]{0,6}",
        ) {
            let typed = Asset::new(amount, precision, symbol);
            let json = serde_json::to_value(&typed).unwrap();
            let mut a = Sink::new();
            let mut b = Sink::new();
            steem_wire_protocol::asset(&mut a, &typed).unwrap();
            asset(&mut b, &json).unwrap();
            prop_assert_eq!(a.as_bytes(), b.as_bytes());
        }

        #[test]
        fn prop_beneficiary_schema_matches_typed(
            account in "[a-z0-9.-]{0,16}",
            weight in any::<u16>(),
        ) {
            let typed = Beneficiary { account, weight };
            let json = serde_json::to_value(&typed).unwrap();
            let mut a = Sink::new();
            let mut b = Sink::new();
            steem_wire_protocol::beneficiary(&mut a, &typed).unwrap();
            beneficiary(&mut b, &json).unwrap();
            prop_assert_eq!(a.as_bytes(), b.as_bytes());
        }
    }
}
