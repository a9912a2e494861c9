//! Encoders for protocol records.

use steem_wire_core::{
    bytes, int64, map, string, uint16, uint32, uint8, EncodeError, Encoder, Result, Sink,
};

use crate::crypto::PublicKeyBytes;
use crate::types::{Asset, Authority, Beneficiary, ChainProperties, Price};

/// Width of the zero-padded symbol field in an asset.
pub const ASSET_SYMBOL_WIDTH: usize = 7;

/// Append a public key's raw bytes verbatim, no length prefix.
pub fn public_key<K: PublicKeyBytes + ?Sized>(sink: &mut Sink, key: &K) -> Result<usize> {
    let raw = key.raw_bytes();
    sink.append(&raw)?;
    Ok(raw.len())
}

/// Encode an asset as 16 bytes: `int64` amount, `uint8` precision, then the
/// symbol in a 7-byte zero-padded field.
///
/// Symbols of seven or more UTF-8 bytes are rejected, so the field always
/// ends in a NUL: `"foobarb"` and `"f\u{f6}\u{f6}\u{f6}"` (both seven
/// bytes) fail with `FieldTooLong`. The limit is on bytes, not characters.
pub fn asset(sink: &mut Sink, value: &Asset) -> Result<usize> {
    let symbol = value.symbol.as_bytes();
    if symbol.len() >= ASSET_SYMBOL_WIDTH {
        return Err(EncodeError::FieldTooLong {
            field: "asset symbol",
            len: symbol.len(),
            max: ASSET_SYMBOL_WIDTH - 1,
        });
    }
    let mut field = [0u8; ASSET_SYMBOL_WIDTH];
    field[..symbol.len()].copy_from_slice(symbol);

    sink.atomic(|sink| {
        Ok(int64(sink, &value.amount)? + uint8(sink, &value.precision)? + bytes(sink, &field)?)
    })
}

/// Encode an authority: `uint32` threshold, then account and key weights as
/// counted pair lists.
pub fn authority<K: PublicKeyBytes>(sink: &mut Sink, value: &Authority<K>) -> Result<usize> {
    sink.atomic(|sink| {
        let mut len = uint32(sink, &value.weight_threshold)?;
        len += map(string::<String>, uint16).encode(sink, &value.account_auths)?;
        len += map(public_key::<K>, uint16).encode(sink, &value.key_auths)?;
        Ok(len)
    })
}

/// Encode a beneficiary: account name, then `uint16` weight.
pub fn beneficiary(sink: &mut Sink, value: &Beneficiary) -> Result<usize> {
    sink.atomic(|sink| Ok(string(sink, &value.account)? + uint16(sink, &value.weight)?))
}

/// Encode a price as its base asset followed by its quote asset.
pub fn price(sink: &mut Sink, value: &Price) -> Result<usize> {
    sink.atomic(|sink| Ok(asset(sink, &value.base)? + asset(sink, &value.quote)?))
}

/// Encode chain properties: creation fee asset, `uint32` block size,
/// `uint16` interest rate.
pub fn chain_properties(sink: &mut Sink, value: &ChainProperties) -> Result<usize> {
    sink.atomic(|sink| {
        Ok(asset(sink, &value.account_creation_fee)?
            + uint32(sink, &value.maximum_block_size)?
            + uint16(sink, &value.sbd_interest_rate)?)
    })
}
