//! Encoding benchmarks.
//!
//! Measures:
//! - Varint encoding across widths
//! - UTF-16 to UTF-8 string encoding
//! - Typed versus schema encoding of the same protocol records

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::Value;

use steem_wire::core::{svarint, uvarint, wide_string};
use steem_wire::protocol::{self, Authority, RawPublicKey};
use steem_wire::{schema, Sink, SinkConfig};
use steem_wire_testkit::fixtures;

fn bench_varints(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint");
    for value in [0u64, 300, u64::from(u32::MAX), u64::MAX] {
        group.bench_with_input(BenchmarkId::new("uvarint", value), &value, |b, v| {
            b.iter(|| {
                let mut sink = Sink::new();
                uvarint(&mut sink, black_box(v)).unwrap();
                sink
            })
        });
    }
    for value in [-1i64, i64::MIN] {
        group.bench_with_input(BenchmarkId::new("svarint", value), &value, |b, v| {
            b.iter(|| {
                let mut sink = Sink::new();
                svarint(&mut sink, black_box(v)).unwrap();
                sink
            })
        });
    }
    group.finish();
}

fn bench_wide_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_string");
    for (name, text) in [
        ("ascii", "steemit memo ".repeat(64)),
        ("mixed", "h\u{e9}llo \u{2603} \u{1d306} ".repeat(64)),
    ] {
        let units: Vec<u16> = text.encode_utf16().collect();
        group.throughput(Throughput::Elements(units.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &units, |b, units| {
            b.iter(|| {
                let mut sink = Sink::new();
                wide_string(&mut sink, black_box(units)).unwrap();
                sink
            })
        });
    }
    group.finish();
}

fn large_authority(keys: u8) -> Authority {
    (0..keys).fold(Authority::new(u32::from(keys) / 2 + 1), |auth, i| {
        let mut raw = fixtures::STM_KEY_BYTES.to_vec();
        raw[0] = i;
        auth.with_account(format!("account-{i}"), 1)
            .with_key(RawPublicKey(raw), 1)
    })
}

fn bench_authority(c: &mut Criterion) {
    let mut group = c.benchmark_group("authority");
    let config = SinkConfig {
        initial_capacity: 4096,
    };

    for keys in [1u8, 16] {
        let typed = large_authority(keys);
        let dynamic: Value = serde_json::to_value(&typed).unwrap();

        group.bench_with_input(BenchmarkId::new("typed", keys), &typed, |b, auth| {
            b.iter(|| {
                let mut sink = Sink::with_config(&config);
                protocol::authority(&mut sink, black_box(auth)).unwrap();
                sink.finalize().unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("schema", keys), &dynamic, |b, value| {
            b.iter(|| {
                let mut sink = Sink::with_config(&config);
                schema::authority(&mut sink, black_box(value)).unwrap();
                sink.finalize().unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_varints, bench_wide_strings, bench_authority);
criterion_main!(benches);
