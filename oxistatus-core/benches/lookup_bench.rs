//! Lookup benchmarks for status list readers
//!
//! Measures:
//! - Random-access `status_at` cost per bit width
//! - Full scans through the status iterator
//! - Raw `extract_bits` on windows that straddle byte boundaries

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxistatus_core::{BitWidth, ReadStatus, extract_bits};
use std::hint::black_box;

/// Packed buffer size used by every benchmark (1 MB).
const BUFFER_SIZE: usize = 1024 * 1024;

/// Number of lookups per iteration in the random-access benchmarks.
const LOOKUPS: usize = 4096;

/// Reproducible pseudo-random bytes (linear congruential generator).
fn random_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x0123_4567_89AB_CDEF;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

/// Reproducible indices spread over `len` entries.
fn random_indices(len: u64, count: usize) -> Vec<u64> {
    let mut seed: u64 = 0xDEAD_BEEF;
    (0..count)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 16) % len
        })
        .collect()
}

/// Benchmark random lookups for each supported width
fn bench_random_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("status_at_random");
    let raw = random_bytes(BUFFER_SIZE);

    for width in BitWidth::ALL {
        let reader = ReadStatus::from_raw(width, raw.clone());
        let indices = random_indices(reader.len(), LOOKUPS);

        group.throughput(Throughput::Elements(LOOKUPS as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}bit", width.bits())),
            &indices,
            |b, indices| {
                b.iter(|| {
                    for &index in indices {
                        black_box(reader.status_at(black_box(index)).ok());
                    }
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a full scan of the list via the iterator
fn bench_full_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("status_scan");
    let raw = random_bytes(BUFFER_SIZE);

    for width in BitWidth::ALL {
        let reader = ReadStatus::from_raw(width, raw.clone());

        group.throughput(Throughput::Bytes(BUFFER_SIZE as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}bit", width.bits())),
            &reader,
            |b, reader| {
                b.iter(|| {
                    let invalid = reader.iter().filter(|s| !s.is_valid()).count();
                    black_box(invalid);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark generic extraction on unaligned windows
fn bench_unaligned_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_bits_unaligned");
    let raw = random_bytes(64 * 1024);

    for width in [3u8, 5, 12, 32] {
        let offsets = random_indices((raw.len() as u64 - 8) * 8, LOOKUPS);

        group.throughput(Throughput::Elements(LOOKUPS as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &offsets, |b, offsets| {
            b.iter(|| {
                for &offset in offsets {
                    black_box(extract_bits(black_box(&raw), offset, width));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_random_lookups,
    bench_full_scan,
    bench_unaligned_extract,
);
criterion_main!(benches);
