//! Packet and correlation benchmark suite.
//!
//! Benchmarks the hot paths of the event loop:
//! - Packet serialization and parsing
//! - Per-channel FIFO correlation at different channel counts
//! - Scan code table lookups
//!
//! Run with: cargo bench --bench packet
//! Results saved to: target/criterion/

use std::hint::black_box;

use coffee_lpu237::keyboard::{Language, get_ascii_to_hid_key_map_value};
use coffee_lpu237::protocol::{ActionCode, Packet};
use coffee_lpu237::queue::MapOfQueue;
use coffee_lpu237::{DeviceIndex, SessionNumber};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

// ============================================================================
// Benchmark Parameters
// ============================================================================

const CHANNEL_COUNTS: &[u32] = &[1, 8, 64];
const REQUESTS_PER_CHANNEL: usize = 16;

const REPLY: &str = r#"{"request_type":"R","session_number":7,"packet_owner":"D","device_index":5,"action_code":"t","in_id":0,"out_id":0,"data_field_type":"S","data_field":["success","6d0100"]}"#;

// ============================================================================
// Benchmark: Packet Codec
// ============================================================================

fn bench_packet_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("packet_codec");

    let request = Packet::device(
        SessionNumber::new(7),
        DeviceIndex::new(5),
        ActionCode::DeviceTransmit,
    )
    .with_hex("c20000000000000000");

    group.bench_function("serialize_transmit", |b| {
        b.iter(|| black_box(&request).to_json().expect("serialize"));
    });

    group.bench_function("parse_reply", |b| {
        b.iter(|| Packet::from_json(black_box(REPLY)).expect("parse"));
    });

    group.finish();
}

// ============================================================================
// Benchmark: Reply Correlation
// ============================================================================

fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation");

    for &channels in CHANNEL_COUNTS {
        group.bench_with_input(
            BenchmarkId::new("push_front", channels),
            &channels,
            |b, &channel_count| {
                b.iter(|| {
                    let mut queue = MapOfQueue::new();
                    for n in 0..REQUESTS_PER_CHANNEL {
                        for channel in 0..channel_count {
                            queue.push(DeviceIndex::new(channel), n);
                        }
                    }
                    let mut resolved = 0;
                    for channel in 0..channel_count {
                        while let Some(n) = queue.front(DeviceIndex::new(channel)) {
                            resolved += n;
                        }
                    }
                    black_box(resolved)
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Benchmark: Scan Code Lookup
// ============================================================================

fn bench_key_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_lookup");

    group.bench_function("hid_field_all_ascii", |b| {
        b.iter(|| {
            for ascii in 0..128u32 {
                black_box(get_ascii_to_hid_key_map_value(4, ascii, 1));
            }
        });
    });

    group.bench_function("hid_stroke_text", |b| {
        let text = b"Track 1 %B4111111111111111^DOE/JOHN^?";
        b.iter(|| {
            text.iter()
                .filter_map(|&ch| Language::UsaEnglish.hid_key_stroke(ch))
                .count()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_packet_codec, bench_correlation, bench_key_lookup);
criterion_main!(benches);
