//! Fixed-width primitive encoders.
//!
//! Every encoder here writes a fixed number of bytes and returns that count.
//! Integers are little-endian unless a `*_with` variant selects big-endian.
//! Signed values are stored as two's complement of the declared width.

use chrono::{DateTime, Utc};

use crate::error::{EncodeError, Result};
use crate::sink::Sink;

/// Largest block accepted by [`bytes`].
pub const MAX_BYTES_LEN: usize = 16384;

/// Byte order for multi-byte integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

macro_rules! fixed_int {
    ($name:ident, $with:ident, $ty:ty) => {
        #[doc = concat!("Encode a `", stringify!($ty), "` little-endian.")]
        pub fn $name(sink: &mut Sink, value: &$ty) -> Result<usize> {
            $with(sink, *value, Endian::Little)
        }

        #[doc = concat!("Encode a `", stringify!($ty), "` with the given byte order.")]
        pub fn $with(sink: &mut Sink, value: $ty, endian: Endian) -> Result<usize> {
            let bytes = match endian {
                Endian::Little => value.to_le_bytes(),
                Endian::Big => value.to_be_bytes(),
            };
            sink.append(&bytes)?;
            Ok(bytes.len())
        }
    };
}

fixed_int!(uint16, uint16_with, u16);
fixed_int!(int16, int16_with, i16);
fixed_int!(uint32, uint32_with, u32);
fixed_int!(int32, int32_with, i32);

/// Encode a `u8`.
pub fn uint8(sink: &mut Sink, value: &u8) -> Result<usize> {
    sink.append(&[*value])?;
    Ok(1)
}

/// Encode an `i8` as its two's-complement byte.
pub fn int8(sink: &mut Sink, value: &i8) -> Result<usize> {
    sink.append(&value.to_le_bytes())?;
    Ok(1)
}

/// Encode an `i64` as 8 little-endian bytes.
pub fn int64(sink: &mut Sink, value: &i64) -> Result<usize> {
    sink.append(&value.to_le_bytes())?;
    Ok(8)
}

/// Encode an IEEE-754 double, little-endian.
pub fn float64(sink: &mut Sink, value: &f64) -> Result<usize> {
    sink.append(&value.to_le_bytes())?;
    Ok(8)
}

/// Encode a boolean as `1` or `0`.
pub fn boolean(sink: &mut Sink, value: &bool) -> Result<usize> {
    sink.append(&[u8::from(*value)])?;
    Ok(1)
}

/// Encode an instant as little-endian `u32` seconds since the Unix epoch.
///
/// Sub-second precision is truncated. Instants before 1970 or after
/// 2106-02-07T06:28:15Z do not fit and are rejected.
pub fn date(sink: &mut Sink, value: &DateTime<Utc>) -> Result<usize> {
    let secs = value.timestamp();
    let secs = u32::try_from(secs).map_err(|_| EncodeError::out_of_range("date", value))?;
    uint32(sink, &secs)
}

/// Append a raw block verbatim, without a length prefix.
pub fn bytes(sink: &mut Sink, value: &[u8]) -> Result<usize> {
    if value.len() > MAX_BYTES_LEN {
        return Err(EncodeError::TooLarge {
            len: value.len(),
            max: MAX_BYTES_LEN,
        });
    }
    sink.append(value)?;
    Ok(value.len())
}

/// Write nothing. Placeholder payload for variants that carry no data.
pub fn void(_sink: &mut Sink, _value: &()) -> Result<usize> {
    Ok(0)
}
