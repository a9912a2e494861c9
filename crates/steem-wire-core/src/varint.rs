//! Base-128 variable-length integers.
//!
//! `uvarint` emits the low seven bits of the remaining magnitude per byte,
//! least significant group first, with the high bit set on every byte but the
//! last. The output is canonical: no superfluous zero groups.
//!
//! `svarint` zig-zag maps a signed value onto the unsigned range first, so
//! small magnitudes of either sign stay short: 0, -1, 1, -2, 2 map to
//! 0, 1, 2, 3, 4.

use crate::error::Result;
use crate::sink::Sink;

/// Longest possible `uvarint` encoding of a `u64`.
pub const MAX_UVARINT_LEN: usize = 10;

/// Encode an unsigned integer as a canonical base-128 varint.
pub fn uvarint(sink: &mut Sink, value: &u64) -> Result<usize> {
    let mut buf = [0u8; MAX_UVARINT_LEN];
    let mut len = 0;
    let mut rest = *value;
    loop {
        let group = (rest % 128) as u8;
        rest /= 128;
        if rest == 0 {
            buf[len] = group;
            len += 1;
            break;
        }
        buf[len] = group | 0x80;
        len += 1;
    }
    sink.append(&buf[..len])?;
    Ok(len)
}

/// Encode a signed integer as a zig-zag mapped varint.
pub fn svarint(sink: &mut Sink, value: &i64) -> Result<usize> {
    uvarint(sink, &zigzag(*value))
}

/// Zig-zag map: non-negative `n` to `2n`, negative `n` to `-2n - 1`.
pub fn zigzag(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

/// Number of bytes `uvarint` writes for `value`.
pub fn uvarint_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}
