//! Adversarial UTF-16 corpus.
//!
//! Each case pairs UTF-16 input with its UTF-8 byte length and encoding.
//! Unpaired surrogates are expected to come out as U+FFFD (`efbfbd`).

use steem_wire_core::{raw_wide_string, utf8_length, Sink};

/// One UTF-16 input and the UTF-8 it must produce.
#[derive(Debug, Clone, Copy)]
pub struct Utf16Case {
    pub name: &'static str,
    pub input: &'static [u16],
    pub utf8_length: usize,
    pub utf8_hex: &'static str,
}

static CORPUS: &[Utf16Case] = &[
    Utf16Case {
        name: "empty",
        input: &[],
        utf8_length: 0,
        utf8_hex: "",
    },
    Utf16Case {
        name: "ascii",
        input: &[0x0077, 0x0061, 0x0074],
        utf8_length: 3,
        utf8_hex: "776174",
    },
    Utf16Case {
        name: "two-byte sequence",
        input: &[0x00A9],
        utf8_length: 2,
        utf8_hex: "c2a9",
    },
    Utf16Case {
        name: "three-byte sequence",
        input: &[0x2603],
        utf8_length: 3,
        utf8_hex: "e29883",
    },
    Utf16Case {
        name: "astral surrogate pair",
        input: &[0xD834, 0xDF06],
        utf8_length: 4,
        utf8_hex: "f09d8c86",
    },
    Utf16Case {
        name: "mixed widths",
        input: &[0x0077, 0xD834, 0xDF06, 0x00E9, 0x2603],
        utf8_length: 10,
        utf8_hex: "77f09d8c86c3a9e29883",
    },
    Utf16Case {
        name: "combining acute accent",
        input: &[0x0065, 0x0301],
        utf8_length: 3,
        utf8_hex: "65cc81",
    },
    Utf16Case {
        name: "zero width joiner family",
        input: &[0xD83D, 0xDC68, 0x200D, 0xD83D, 0xDC69, 0x200D, 0xD83D, 0xDC67],
        utf8_length: 18,
        utf8_hex: "f09f91a8e2808df09f91a9e2808df09f91a7",
    },
    Utf16Case {
        name: "regional indicator flag",
        input: &[0xD83C, 0xDDFA, 0xD83C, 0xDDF8],
        utf8_length: 8,
        utf8_hex: "f09f87baf09f87b8",
    },
    Utf16Case {
        name: "lone high surrogate",
        input: &[0xD800],
        utf8_length: 3,
        utf8_hex: "efbfbd",
    },
    Utf16Case {
        name: "lone low surrogate",
        input: &[0xDC00],
        utf8_length: 3,
        utf8_hex: "efbfbd",
    },
    Utf16Case {
        name: "reversed surrogate pair",
        input: &[0xDC00, 0xD800],
        utf8_length: 6,
        utf8_hex: "efbfbdefbfbd",
    },
    Utf16Case {
        name: "high surrogate before ascii",
        input: &[0xD83D, 0x0061],
        utf8_length: 4,
        utf8_hex: "efbfbd61",
    },
    Utf16Case {
        name: "trailing high surrogate",
        input: &[0x0061, 0xDBFF],
        utf8_length: 4,
        utf8_hex: "61efbfbd",
    },
    Utf16Case {
        name: "maximum scalar",
        input: &[0xDBFF, 0xDFFF],
        utf8_length: 4,
        utf8_hex: "f48fbfbf",
    },
    Utf16Case {
        name: "byte order mark",
        input: &[0xFEFF],
        utf8_length: 3,
        utf8_hex: "efbbbf",
    },
    Utf16Case {
        name: "embedded nul",
        input: &[0x0061, 0x0000, 0x0062],
        utf8_length: 3,
        utf8_hex: "610062",
    },
    Utf16Case {
        name: "right to left",
        input: &[0x05E9, 0x05DC, 0x05D5, 0x05DD],
        utf8_length: 8,
        utf8_hex: "d7a9d79cd795d79d",
    },
    Utf16Case {
        name: "noncharacter",
        input: &[0xFFFF],
        utf8_length: 3,
        utf8_hex: "efbfbf",
    },
    Utf16Case {
        name: "width boundaries",
        input: &[0x007F, 0x0080, 0x07FF, 0x0800, 0xFFFF],
        utf8_length: 11,
        utf8_hex: "7fc280dfbfe0a080efbfbf",
    },
    Utf16Case {
        name: "stacked combining marks",
        input: &[0x005A, 0x0351, 0x036B, 0x0343, 0x036A],
        utf8_length: 9,
        utf8_hex: "5acd91cdabcd83cdaa",
    },
];

/// Every case in the corpus.
pub fn utf16_corpus() -> &'static [Utf16Case] {
    CORPUS
}

/// Run the corpus through [`utf8_length`] and [`raw_wide_string`].
///
/// Returns `(name, passed, got_hex)` per case.
pub fn verify_corpus() -> Vec<(String, bool, String)> {
    CORPUS
        .iter()
        .map(|case| {
            let mut sink = Sink::new();
            let got = match raw_wide_string(&mut sink, case.input) {
                Ok(len) => (len, sink.to_hex()),
                Err(e) => (0, e.to_string()),
            };
            let passed = utf8_length(case.input) == case.utf8_length
                && got.0 == case.utf8_length
                && got.1 == case.utf8_hex;
            (case.name.to_string(), passed, got.1)
        })
        .collect()
}
