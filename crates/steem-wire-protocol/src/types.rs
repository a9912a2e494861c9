//! Fixed-shape protocol records.
//!
//! Field order in each struct is the wire order.

use serde::{Deserialize, Serialize};

use crate::crypto::RawPublicKey;

/// An amount of a chain asset, e.g. `12.345 SBD` is `{ amount: 12345, precision: 3, symbol: "SBD" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub amount: i64,
    pub precision: u8,
    pub symbol: String,
}

impl Asset {
    pub fn new(amount: i64, precision: u8, symbol: impl Into<String>) -> Self {
        Self {
            amount,
            precision,
            symbol: symbol.into(),
        }
    }
}

/// Weighted set of accounts and keys that can approve an operation.
///
/// Entries are encoded in the order given; nothing is sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority<K = RawPublicKey> {
    pub weight_threshold: u32,
    pub account_auths: Vec<(String, u16)>,
    pub key_auths: Vec<(K, u16)>,
}

impl<K> Authority<K> {
    /// An authority with the given threshold and no members.
    pub fn new(weight_threshold: u32) -> Self {
        Self {
            weight_threshold,
            account_auths: Vec::new(),
            key_auths: Vec::new(),
        }
    }

    pub fn with_account(mut self, account: impl Into<String>, weight: u16) -> Self {
        self.account_auths.push((account.into(), weight));
        self
    }

    pub fn with_key(mut self, key: K, weight: u16) -> Self {
        self.key_auths.push((key, weight));
        self
    }
}

/// A share of comment rewards routed to another account, in basis points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub account: String,
    pub weight: u16,
}

/// Exchange rate between two assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub base: Asset,
    pub quote: Asset,
}

/// Chain parameters a witness votes on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainProperties {
    pub account_creation_fee: Asset,
    pub maximum_block_size: u32,
    pub sbd_interest_rate: u16,
}
