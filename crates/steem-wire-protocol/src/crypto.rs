//! Public key handling at the encoder boundary.
//!
//! Key derivation, parsing of textual key formats and signing live outside
//! this workspace. The encoder only needs a key's canonical raw bytes, which
//! it obtains through [`PublicKeyBytes`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Source of a public key's canonical raw byte form.
///
/// Implementations must be deterministic: the same key always yields the
/// same bytes, with a fixed width for a given key algorithm.
pub trait PublicKeyBytes {
    fn raw_bytes(&self) -> Cow<'_, [u8]>;
}

/// Raw key bytes already resolved by the key-handling layer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RawPublicKey(pub Vec<u8>);

impl RawPublicKey {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.is_empty() {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        Ok(Self(bytes))
    }
}

impl PublicKeyBytes for RawPublicKey {
    fn raw_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.0)
    }
}

impl fmt::Debug for RawPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.to_hex();
        write!(f, "RawPublicKey({})", &hex[..hex.len().min(16)])
    }
}

impl Serialize for RawPublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RawPublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
