//! Test fixtures and helpers.
//!
//! Deterministic keys and ready-made protocol records.

use steem_wire_protocol::{Asset, Authority, Beneficiary, ChainProperties, Price, RawPublicKey};

/// Raw bytes of `STM6RoGeVxoCGoSsNrW4XhTx6PQMxtf1bZV1bW9QxPiS6dSyuUBKF`, as hex.
pub const STM_KEY_HEX: &str = "cac96c8360a74b0b19c65d16c15f9bedae40e389b02706890d1268993a61891243cf1937c1ebfffae69049cd46a0fea4614edf3870056bbcadf72df15a9f49c2";

/// Raw bytes of `STM6RoGeVxoCGoSsNrW4XhTx6PQMxtf1bZV1bW9QxPiS6dSyuUBKF`.
pub const STM_KEY_BYTES: [u8; 64] = [
    202, 201, 108, 131, 96, 167, 75, 11, 25, 198, 93, 22, 193, 95, 155, 237, 174, 64, 227, 137,
    176, 39, 6, 137, 13, 18, 104, 153, 58, 97, 137, 18, 67, 207, 25, 55, 193, 235, 255, 250, 230,
    144, 73, 205, 70, 160, 254, 164, 97, 78, 223, 56, 112, 5, 107, 188, 173, 247, 45, 241, 90,
    159, 73, 194,
];

/// The STM reference key as a [`RawPublicKey`].
pub fn stm_public_key() -> RawPublicKey {
    RawPublicKey::from_bytes(STM_KEY_BYTES)
}

/// The authority used throughout the reference vectors.
pub fn reference_authority() -> Authority {
    Authority::new(99999)
        .with_account("goldibex", 5)
        .with_account("sneak", 10)
        .with_key(stm_public_key(), 1)
}

/// Distinct 64-byte keys for multi-party records.
///
/// Party `i` is the STM reference key with its first byte replaced by `i`.
pub fn party_keys(count: u8) -> Vec<RawPublicKey> {
    (0..count)
        .map(|i| {
            let mut raw = STM_KEY_BYTES;
            raw[0] = i;
            RawPublicKey::from_bytes(raw)
        })
        .collect()
}

/// An authority over `keys`, each with weight 1, in the order given.
pub fn multisig_authority(keys: &[RawPublicKey], threshold: u32) -> Authority {
    keys.iter().fold(Authority::new(threshold), |auth, key| {
        auth.with_key(key.clone(), 1)
    })
}

/// `1.000 STEEM` / `0.250 SBD` style amounts.
pub fn steem(amount: i64) -> Asset {
    Asset::new(amount, 3, "STEEM")
}

pub fn sbd(amount: i64) -> Asset {
    Asset::new(amount, 3, "SBD")
}

/// A feed price of `base` SBD per `quote` STEEM.
pub fn feed_price(base: i64, quote: i64) -> Price {
    Price {
        base: sbd(base),
        quote: steem(quote),
    }
}

pub fn default_chain_properties() -> ChainProperties {
    ChainProperties {
        account_creation_fee: steem(1),
        maximum_block_size: 65536,
        sbd_interest_rate: 1000,
    }
}

pub fn beneficiary(account: &str, weight: u16) -> Beneficiary {
    Beneficiary {
        account: account.to_string(),
        weight,
    }
}
