//! UTF-8 accounting and string encoders.
//!
//! Text arrives either as Rust strings (already UTF-8) or as UTF-16 code
//! units, which is how keys and memos show up when they come from a
//! JavaScript or JSON source. UTF-16 input may contain unpaired surrogates.
//! Those are counted as 3-byte scalars and written as U+FFFD, which is also
//! three bytes, so [`utf8_length`] always equals the bytes written.
//!
//! [`raw_wide_string`] walks the text with [`code_point_at`], passes each
//! scalar through [`replace_lone_surrogate`], and unpacks [`ucs_to_utf8`]
//! into bytes.

use crate::error::Result;
use crate::sink::Sink;
use crate::varint::uvarint;

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Scalar value starting at code unit `index`.
///
/// A high surrogate followed by a low surrogate is combined into one scalar.
/// An unpaired surrogate yields its raw 16-bit value. Returns `None` when
/// `index` is past the end.
pub fn code_point_at(text: &[u16], index: usize) -> Option<u32> {
    let first = *text.get(index)?;
    if HIGH_SURROGATES.contains(&first) {
        if let Some(&second) = text.get(index + 1) {
            if LOW_SURROGATES.contains(&second) {
                let high = u32::from(first - 0xD800);
                let low = u32::from(second - 0xDC00);
                return Some(0x10000 + (high << 10) + low);
            }
        }
    }
    Some(u32::from(first))
}

/// Pack the UTF-8 encoding of `scalar` into one integer, leading byte in
/// the most significant position.
///
/// Surrogate values are packed like any other 3-byte scalar. Returns `None`
/// above U+10FFFF.
pub fn ucs_to_utf8(scalar: u32) -> Option<u32> {
    let c = scalar;
    let packed = match utf8_width(c)? {
        1 => c,
        2 => (0xC0 | (c >> 6)) << 8 | (0x80 | (c & 0x3F)),
        3 => (0xE0 | (c >> 12)) << 16 | (0x80 | ((c >> 6) & 0x3F)) << 8 | (0x80 | (c & 0x3F)),
        _ => {
            (0xF0 | (c >> 18)) << 24
                | (0x80 | ((c >> 12) & 0x3F)) << 16
                | (0x80 | ((c >> 6) & 0x3F)) << 8
                | (0x80 | (c & 0x3F))
        }
    };
    Some(packed)
}

/// Map an unpaired surrogate value to U+FFFD; other scalars pass through.
pub fn replace_lone_surrogate(scalar: u32) -> u32 {
    match scalar {
        0xD800..=0xDFFF => 0xFFFD,
        _ => scalar,
    }
}

/// Bytes needed to encode `scalar` in UTF-8, or `None` above U+10FFFF.
pub fn utf8_width(scalar: u32) -> Option<usize> {
    match scalar {
        0..=0x7F => Some(1),
        0x80..=0x7FF => Some(2),
        0x800..=0xFFFF => Some(3),
        0x10000..=0x10FFFF => Some(4),
        _ => None,
    }
}

/// UTF-8 length of UTF-16 text, without encoding it.
pub fn utf8_length(text: &[u16]) -> usize {
    let mut len = 0;
    let mut i = 0;
    while let Some(scalar) = code_point_at(text, i) {
        // code_point_at never yields more than U+10FFFF
        len += utf8_width(scalar).unwrap_or(4);
        i += if scalar > 0xFFFF { 2 } else { 1 };
    }
    len
}

/// Write the UTF-8 bytes of `text` with no length prefix.
pub fn raw_string<S: AsRef<str> + ?Sized>(sink: &mut Sink, value: &S) -> Result<usize> {
    let text = value.as_ref();
    sink.append(text.as_bytes())?;
    Ok(text.len())
}

/// Write a `uvarint` byte length followed by the UTF-8 bytes of `text`.
pub fn string<S: AsRef<str> + ?Sized>(sink: &mut Sink, value: &S) -> Result<usize> {
    let text = value.as_ref();
    let prefix = uvarint(sink, &(text.len() as u64))?;
    Ok(prefix + raw_string(sink, text)?)
}

/// Write UTF-16 text as UTF-8 with no length prefix.
pub fn raw_wide_string(sink: &mut Sink, value: &[u16]) -> Result<usize> {
    let mut encoded = Vec::with_capacity(utf8_length(value));
    let mut i = 0;
    while let Some(scalar) = code_point_at(value, i) {
        i += if scalar > 0xFFFF { 2 } else { 1 };
        let scalar = replace_lone_surrogate(scalar);
        // code_point_at never yields more than U+10FFFF
        if let (Some(width), Some(packed)) = (utf8_width(scalar), ucs_to_utf8(scalar)) {
            encoded.extend_from_slice(&packed.to_be_bytes()[4 - width..]);
        }
    }
    sink.append(&encoded)?;
    Ok(encoded.len())
}

/// Write a `uvarint` UTF-8 length followed by the UTF-8 bytes of UTF-16 text.
pub fn wide_string(sink: &mut Sink, value: &[u16]) -> Result<usize> {
    let prefix = uvarint(sink, &(utf8_length(value) as u64))?;
    Ok(prefix + raw_wide_string(sink, value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wide(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_code_point_at() {
        let text = wide("w\u{1d306}");
        assert_eq!(code_point_at(&text, 0), Some(119));
        assert_eq!(code_point_at(&text, 1), Some(0x1d306));
        // Landing on the low half yields the raw unit
        assert_eq!(code_point_at(&text, 2), Some(0xdf06));
        assert_eq!(code_point_at(&text, 3), None);
    }

    #[test]
    fn test_code_point_at_unpaired() {
        assert_eq!(code_point_at(&[0xd800], 0), Some(0xd800));
        assert_eq!(code_point_at(&[0xd800, 0x0041], 0), Some(0xd800));
        assert_eq!(code_point_at(&[0xdc00, 0xd800], 0), Some(0xdc00));
    }

    #[test]
    fn test_ucs_to_utf8() {
        assert_eq!(ucs_to_utf8(0x7f), Some(0x7f));
        assert_eq!(ucs_to_utf8(0xa9), Some(0xc2a9));
        assert_eq!(ucs_to_utf8(0x2070), Some(0xe281b0));
        assert_eq!(ucs_to_utf8(0x2603), Some(0xe29883));
        assert_eq!(ucs_to_utf8(0x1d306), Some(0xf09d8c86));
        assert_eq!(ucs_to_utf8(0x10ffff), Some(0xf48fbfbf));
        assert_eq!(ucs_to_utf8(0x110000), None);
    }

    #[test]
    fn test_utf8_length_lone_surrogates() {
        assert_eq!(utf8_length(&[]), 0);
        assert_eq!(utf8_length(&[0xd800]), 3);
        assert_eq!(utf8_length(&[0xdfff]), 3);
        assert_eq!(utf8_length(&[0x61, 0xd800, 0x62]), 5);
        // Reversed pair is two lone surrogates
        assert_eq!(utf8_length(&[0xdc00, 0xd800]), 6);
    }

    #[test]
    fn test_raw_wide_string_replaces_lone_surrogates() {
        let mut sink = Sink::new();
        let units = [0x61, 0xd800, 0x62];
        assert_eq!(raw_wide_string(&mut sink, &units).unwrap(), 5);
        assert_eq!(sink.to_hex(), "61efbfbd62");
    }

    #[test]
    fn test_raw_wide_string_follows_packed_scalars() {
        let units = [0x7f, 0xa9, 0x2603, 0xd834, 0xdf06, 0xdbff, 0xdfff, 0xdc00];
        let mut sink = Sink::new();
        assert_eq!(raw_wide_string(&mut sink, &units).unwrap(), 17);
        assert_eq!(sink.to_hex(), "7fc2a9e29883f09d8c86f48fbfbfefbfbd");
    }

    #[test]
    fn test_replace_lone_surrogate() {
        assert_eq!(replace_lone_surrogate(0xd800), 0xfffd);
        assert_eq!(replace_lone_surrogate(0xdfff), 0xfffd);
        assert_eq!(replace_lone_surrogate(0xd7ff), 0xd7ff);
        assert_eq!(replace_lone_surrogate(0xe000), 0xe000);
        assert_eq!(ucs_to_utf8(replace_lone_surrogate(0xd800)), Some(0xefbfbd));
    }

    #[test]
    fn test_string() {
        let mut sink = Sink::new();
        let len = string(&mut sink, "").unwrap() + string(&mut sink, "wat").unwrap();
        assert_eq!(len, 5);
        assert_eq!(sink.as_bytes(), &[0x00, 0x03, 0x77, 0x61, 0x74]);
    }

    #[test]
    fn test_string_long_prefix() {
        let mut sink = Sink::new();
        let text = "x".repeat(200);
        assert_eq!(string(&mut sink, &text).unwrap(), 202);
        assert_eq!(&sink.as_bytes()[..2], &[0xc8, 0x01]);
    }

    #[test]
    fn test_wide_string_matches_string() {
        let text = "h\u{e9}llo \u{1f600}";
        let mut a = Sink::new();
        let mut b = Sink::new();
        string(&mut a, text).unwrap();
        wide_string(&mut b, &wide(text)).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    proptest! {
        #[test]
        fn prop_utf8_length_matches_rust(s in any::<String>()) {
            prop_assert_eq!(utf8_length(&wide(&s)), s.len());
        }

        #[test]
        fn prop_raw_wide_string_length(units in prop::collection::vec(any::<u16>(), 0..64)) {
            let mut sink = Sink::new();
            let written = raw_wide_string(&mut sink, &units).unwrap();
            prop_assert_eq!(written, utf8_length(&units));
            prop_assert_eq!(sink.len(), written);
        }

        #[test]
        fn prop_raw_wide_string_agrees_with_std(units in prop::collection::vec(any::<u16>(), 0..64)) {
            let expected: String = char::decode_utf16(units.iter().copied())
                .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect();
            let mut sink = Sink::new();
            raw_wide_string(&mut sink, &units).unwrap();
            prop_assert_eq!(sink.as_bytes(), expected.as_bytes());
        }
    }
}
