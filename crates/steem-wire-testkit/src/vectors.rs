//! Golden test vectors for deterministic verification.
//!
//! These are the reference byte sequences for the wire format. Any encoder
//! change that alters one of them is a consensus-breaking change.

use bytes::Bytes;
use serde_json::json;
use steem_wire_core::{self as wire, Encoder, Endian, Result, Sink};
use steem_wire_protocol::{chain_properties, price, Asset, ChainProperties, Price};
use steem_wire_schema::{self as schema, boxed, field, map, object, optional, static_variant};

/// Largest integer a double holds exactly.
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// A golden test vector.
#[derive(Clone, Copy)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Writes the vector's values into a fresh sink.
    pub encode: fn(&mut Sink) -> Result<usize>,
    /// Expected sink contents (hex).
    pub expected_hex: &'static str,
}

impl std::fmt::Debug for GoldenVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoldenVector")
            .field("name", &self.name)
            .field("expected_hex", &self.expected_hex)
            .finish()
    }
}

fn each<T, E: Encoder<T>>(sink: &mut Sink, encoder: E, values: &[T]) -> Result<usize> {
    values
        .iter()
        .try_fold(0, |len, value| Ok(len + encoder.encode(sink, value)?))
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "uint8",
            encode: |sink| {
                let values: Vec<_> = (1..=8).map(|i| json!(i * 32 - 1)).collect();
                each(sink, schema::uint8, &values)
            },
            expected_hex: "1f3f5f7f9fbfdfff",
        },
        GoldenVector {
            name: "int8",
            encode: |sink| {
                let values: Vec<_> = (-4..4).map(|i| json!(i * 32)).collect();
                each(sink, schema::int8, &values)
            },
            expected_hex: "80a0c0e000204060",
        },
        GoldenVector {
            name: "uint16",
            encode: |sink| each(sink, schema::uint16, &[json!(0), json!(256), json!(65535)]),
            expected_hex: "00000001ffff",
        },
        GoldenVector {
            name: "int16",
            encode: |sink| {
                each(
                    sink,
                    schema::int16,
                    &[json!(0), json!(256), json!(-32768), json!(32767)],
                )
            },
            expected_hex: "000000010080ff7f",
        },
        GoldenVector {
            name: "uint32",
            encode: |sink| {
                each(
                    sink,
                    schema::uint32,
                    &[json!(0), json!(16777216), json!(4294967295u32)],
                )
            },
            expected_hex: "0000000000000001ffffffff",
        },
        GoldenVector {
            name: "int32",
            encode: |sink| each(sink, wire::int32, &[i32::MIN, -16777216, 0, i32::MAX]),
            expected_hex: "00000080000000ff00000000ffffff7f",
        },
        GoldenVector {
            name: "int64 within the exact double range",
            encode: |sink| {
                each(
                    sink,
                    wire::int64,
                    &[-MAX_SAFE_INTEGER, -9980899, 0, 9980899, MAX_SAFE_INTEGER],
                )
            },
            expected_hex: "010000000000e0ff1db467ffffffffff0000000000000000e34b980000000000ffffffffffff1f00",
        },
        GoldenVector {
            name: "float64",
            encode: |sink| {
                each(
                    sink,
                    wire::float64,
                    &[1.0, -2.0, 0.0, f64::EPSILON, 3.1415927410, f64::NEG_INFINITY],
                )
            },
            expected_hex: "000000000000f03f00000000000000c00000000000000000000000000000b03c6891ff5ffb210940000000000000f0ff",
        },
        GoldenVector {
            name: "uvarint width boundaries",
            encode: |sink| {
                each(
                    sink,
                    wire::uvarint,
                    &[
                        0,
                        127,
                        128,
                        128 * 128 - 1,
                        128 * 128,
                        128 * 128 * 128 - 1,
                        128 * 128 * 128,
                        u64::from(u32::MAX),
                        MAX_SAFE_INTEGER as u64,
                    ],
                )
            },
            expected_hex: "007f8001ff7f808001ffff7f80808001ffffffff0fffffffffffffff0f",
        },
        GoldenVector {
            name: "svarint zig-zag",
            encode: |sink| {
                each(
                    sink,
                    wire::svarint,
                    &[
                        0,
                        1,
                        -1,
                        2,
                        -2,
                        63,
                        -64,
                        64,
                        -65,
                        8191,
                        -8192,
                        8192,
                        -8193,
                        -(1 << 31),
                        1 << 31,
                        (-MAX_SAFE_INTEGER).div_euclid(2),
                        MAX_SAFE_INTEGER,
                    ],
                )
            },
            expected_hex: "00020104037e7f80018101fe7fff7f808001818001ffffffff0f8080808010ffffffffffffff0ffeffffffffffff1f",
        },
        GoldenVector {
            name: "big-endian mode",
            encode: |sink| {
                Ok(wire::uint8(sink, &0)?
                    + wire::uint16_with(sink, 0x0102, Endian::Big)?
                    + wire::uint32_with(sink, 0x03040506, Endian::Big)?)
            },
            expected_hex: "00010203040506",
        },
        GoldenVector {
            name: "bytes",
            encode: |sink| schema::bytes(sink, &json!([1, 2, 3, 4, 5])),
            expected_hex: "0102030405",
        },
        GoldenVector {
            name: "public key",
            encode: |sink| schema::public_key(sink, &json!(crate::fixtures::STM_KEY_HEX)),
            expected_hex: crate::fixtures::STM_KEY_HEX,
        },
        GoldenVector {
            name: "string",
            encode: |sink| each(sink, schema::string, &[json!(""), json!("wat")]),
            expected_hex: "0003776174",
        },
        GoldenVector {
            name: "boolean",
            encode: |sink| each(sink, schema::boolean, &[json!(true), json!(false), json!(true)]),
            expected_hex: "010001",
        },
        GoldenVector {
            name: "date",
            encode: |sink| each(sink, schema::date, &[json!(0), json!("2038-01-19T03:14:08Z")]),
            expected_hex: "0000000000000080",
        },
        GoldenVector {
            name: "map of uint8 to boolean",
            encode: |sink| {
                map(schema::uint8, schema::boolean)
                    .encode(sink, &json!([[9, false], [15, true], [127, false]]))
            },
            expected_hex: "0309000f017f00",
        },
        GoldenVector {
            name: "array of strings",
            encode: |sink| schema::array(schema::string).encode(sink, &json!(["", "hello", "world"])),
            expected_hex: "03000568656c6c6f05776f726c64",
        },
        GoldenVector {
            name: "optional string",
            encode: |sink| {
                each(
                    sink,
                    optional(schema::string),
                    &[json!("hello"), json!(null), json!("")],
                )
            },
            expected_hex: "010568656c6c6f000100",
        },
        GoldenVector {
            name: "object with absent optional",
            encode: |sink| {
                object([
                    field("foo", schema::boolean),
                    field("bar", optional(schema::boolean)),
                    field("baz", schema::uint8),
                ])
                .encode(sink, &json!({ "foo": true, "baz": 255 }))
            },
            expected_hex: "0100ff",
        },
        GoldenVector {
            name: "static variant",
            encode: |sink| {
                let variant = static_variant([
                    boxed(object([field("name", schema::string)])),
                    boxed(object([field("brillig", schema::boolean)])),
                ]);
                each(
                    sink,
                    variant,
                    &[
                        json!({ "type": 0, "name": "hello" }),
                        json!({ "type": 1, "brillig": true }),
                    ],
                )
            },
            expected_hex: "000568656c6c6f0101",
        },
        GoldenVector {
            name: "asset",
            encode: |sink| {
                schema::asset(sink, &json!({ "symbol": "SBD", "amount": 12345, "precision": 3 }))
            },
            expected_hex: "39300000000000000353424400000000",
        },
        GoldenVector {
            name: "authority",
            encode: |sink| {
                schema::authority(
                    sink,
                    &json!({
                        "weight_threshold": 99999,
                        "account_auths": [["goldibex", 5], ["sneak", 10]],
                        "key_auths": [[crate::fixtures::STM_KEY_HEX, 1]],
                    }),
                )
            },
            expected_hex: "9f8601000208676f6c6469626578050005736e65616b0a0001cac96c8360a74b0b19c65d16c15f9bedae40e389b02706890d1268993a61891243cf1937c1ebfffae69049cd46a0fea4614edf3870056bbcadf72df15a9f49c20100",
        },
        GoldenVector {
            name: "beneficiary",
            encode: |sink| schema::beneficiary(sink, &json!({ "account": "goldibex", "weight": 255 })),
            expected_hex: "08676f6c6469626578ff00",
        },
        GoldenVector {
            name: "price",
            encode: |sink| {
                price(
                    sink,
                    &Price {
                        base: Asset::new(1000, 3, "SBD"),
                        quote: Asset::new(4000, 3, "STEEM"),
                    },
                )
            },
            expected_hex: "e8030000000000000353424400000000a00f00000000000003535445454d0000",
        },
        GoldenVector {
            name: "chain properties",
            encode: |sink| {
                chain_properties(
                    sink,
                    &ChainProperties {
                        account_creation_fee: Asset::new(1, 3, "STEEM"),
                        maximum_block_size: 65536,
                        sbd_interest_rate: 1000,
                    },
                )
            },
            expected_hex: "010000000000000003535445454d000000000100e803",
        },
    ]
}

/// Encode one vector into a fresh sink, returning the count the encoder
/// reported and the finalized bytes.
pub fn encode_vector(vector: &GoldenVector) -> Result<(usize, Bytes)> {
    let mut sink = Sink::new();
    let len = (vector.encode)(&mut sink)?;
    Ok((len, sink.finalize()?))
}

/// Verify all golden vectors.
///
/// Returns `(name, matches, got)` per vector, where `got` is the produced
/// hex or the error message.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| match encode_vector(v) {
            Ok((len, data)) => {
                let hex = hex::encode(&data);
                let matches = len == data.len() && hex == v.expected_hex;
                (v.name.to_string(), matches, hex)
            }
            Err(e) => (v.name.to_string(), false, e.to_string()),
        })
        .collect()
}
