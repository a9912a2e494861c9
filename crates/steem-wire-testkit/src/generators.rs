//! Proptest generators for property-based testing.

use chrono::{DateTime, Utc};
use proptest::prelude::*;

use steem_wire_protocol::{Asset, Authority, Beneficiary, ChainProperties, Price, RawPublicKey};

/// Width of the raw key form used by the fixtures and golden vectors.
pub const RAW_KEY_LEN: usize = 64;

/// Generate raw key bytes of [`RAW_KEY_LEN`] bytes.
pub fn raw_key() -> impl Strategy<Value = RawPublicKey> {
    prop::collection::vec(any::<u8>(), RAW_KEY_LEN).prop_map(RawPublicKey)
}

/// Generate an account name.
pub fn account_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.-]{2,15}".prop_map(String::from)
}

/// Generate an asset symbol that fits the symbol field.
pub fn asset_symbol() -> impl Strategy<Value = String> {
    "[A-Z]{1,6}".prop_map(String::from)
}

/// Generate an Asset.
pub fn asset() -> impl Strategy<Value = Asset> {
    (any::<i64>(), 0u8..=18, asset_symbol())
        .prop_map(|(amount, precision, symbol)| Asset::new(amount, precision, symbol))
}

/// Generate an Authority with up to `max_entries` accounts and keys each.
pub fn authority(max_entries: usize) -> impl Strategy<Value = Authority> {
    (
        any::<u32>(),
        prop::collection::vec((account_name(), any::<u16>()), 0..=max_entries),
        prop::collection::vec((raw_key(), any::<u16>()), 0..=max_entries),
    )
        .prop_map(|(weight_threshold, account_auths, key_auths)| Authority {
            weight_threshold,
            account_auths,
            key_auths,
        })
}

/// Generate a Beneficiary.
pub fn beneficiary() -> impl Strategy<Value = Beneficiary> {
    (account_name(), 0u16..=10000).prop_map(|(account, weight)| Beneficiary { account, weight })
}

/// Generate a Price.
pub fn price() -> impl Strategy<Value = Price> {
    (asset(), asset()).prop_map(|(base, quote)| Price { base, quote })
}

/// Generate ChainProperties.
pub fn chain_properties() -> impl Strategy<Value = ChainProperties> {
    (asset(), any::<u32>(), any::<u16>()).prop_map(
        |(account_creation_fee, maximum_block_size, sbd_interest_rate)| ChainProperties {
            account_creation_fee,
            maximum_block_size,
            sbd_interest_rate,
        },
    )
}

/// Generate an instant that fits the `u32` epoch-seconds date field.
pub fn date() -> impl Strategy<Value = DateTime<Utc>> {
    any::<u32>().prop_filter_map("representable instant", |secs| {
        DateTime::<Utc>::from_timestamp(i64::from(secs), 0)
    })
}

/// Generate arbitrary UTF-16 code units, unpaired surrogates included.
pub fn utf16_text(max_len: usize) -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(any::<u16>(), 0..=max_len)
}

/// Generate byte blocks of up to `max_len` bytes.
pub fn byte_block(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// One of each protocol record, for whole-record properties.
#[derive(Debug, Clone)]
pub struct RecordParams {
    pub asset: Asset,
    pub authority: Authority,
    pub beneficiary: Beneficiary,
    pub price: Price,
    pub chain_properties: ChainProperties,
}

impl Arbitrary for RecordParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            asset(),
            authority(4),
            beneficiary(),
            price(),
            chain_properties(),
        )
            .prop_map(
                |(asset, authority, beneficiary, price, chain_properties)| RecordParams {
                    asset,
                    authority,
                    beneficiary,
                    price,
                    chain_properties,
                },
            )
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use steem_wire_core::{raw_wide_string, utf8_length, EncodeError, Sink};
    use steem_wire_protocol as typed;
    use steem_wire_schema as schema;

    fn typed_bytes<T>(
        encode: fn(&mut Sink, &T) -> Result<usize, EncodeError>,
        value: &T,
    ) -> Vec<u8> {
        let mut sink = Sink::new();
        let len = encode(&mut sink, value).unwrap();
        assert_eq!(len, sink.len());
        sink.as_bytes().to_vec()
    }

    fn schema_bytes(
        encode: fn(&mut Sink, &Value) -> Result<usize, EncodeError>,
        value: &impl serde::Serialize,
    ) -> Vec<u8> {
        let json = serde_json::to_value(value).unwrap();
        let mut sink = Sink::new();
        encode(&mut sink, &json).unwrap();
        sink.as_bytes().to_vec()
    }

    proptest! {
        #[test]
        fn test_typed_and_schema_layers_agree(records: RecordParams) {
            prop_assert_eq!(
                typed_bytes(typed::asset, &records.asset),
                schema_bytes(schema::asset, &records.asset)
            );
            prop_assert_eq!(
                typed_bytes(typed::authority, &records.authority),
                schema_bytes(schema::authority, &records.authority)
            );
            prop_assert_eq!(
                typed_bytes(typed::beneficiary, &records.beneficiary),
                schema_bytes(schema::beneficiary, &records.beneficiary)
            );
            prop_assert_eq!(
                typed_bytes(typed::price, &records.price),
                schema_bytes(schema::price, &records.price)
            );
            prop_assert_eq!(
                typed_bytes(typed::chain_properties, &records.chain_properties),
                schema_bytes(schema::chain_properties, &records.chain_properties)
            );
        }

        #[test]
        fn test_key_auths_carry_full_raw_keys(auth in authority(3)) {
            let bytes = typed_bytes(typed::authority, &auth);
            let accounts: usize = auth
                .account_auths
                .iter()
                .map(|(name, _)| 1 + name.len() + 2)
                .sum();
            // threshold(4) + two single-byte counts + accounts + keys
            prop_assert_eq!(
                bytes.len(),
                4 + 2 + accounts + auth.key_auths.len() * (RAW_KEY_LEN + 2)
            );
        }

        #[test]
        fn test_record_encoding_deterministic(records: RecordParams) {
            prop_assert_eq!(
                typed_bytes(typed::authority, &records.authority),
                typed_bytes(typed::authority, &records.authority)
            );
        }

        #[test]
        fn test_utf8_length_matches_bytes_written(text in utf16_text(64)) {
            let mut sink = Sink::new();
            let written = raw_wide_string(&mut sink, &text).unwrap();
            prop_assert_eq!(written, utf8_length(&text));
            prop_assert!(std::str::from_utf8(sink.as_bytes()).is_ok());
        }

        #[test]
        fn test_date_is_four_bytes(when in date()) {
            let mut sink = Sink::new();
            prop_assert_eq!(steem_wire_core::date(&mut sink, &when).unwrap(), 4);
            prop_assert_eq!(i64::from(u32::from_le_bytes(sink.as_bytes().try_into().unwrap())), when.timestamp());
        }
    }
}
