//! Exsum Throughput Benchmark
//!
//! Statistically rigorous elements-per-second measurements for both
//! accumulator kinds against naive and Kahan baselines.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use exsum::{LargeAccumulator, SmallAccumulator};
use rand::prelude::*;
use std::hint::black_box;

const K: usize = 1024;

// =============================================================================
// BASELINES
// =============================================================================

fn naive(values: &[f64]) -> f64 {
    values.iter().sum()
}

fn kahan(values: &[f64]) -> f64 {
    let (mut sum, mut comp) = (0.0_f64, 0.0_f64);
    for &value in values {
        let y = value - comp;
        let t = sum + y;
        comp = (t - sum) - y;
        sum = t;
    }
    sum
}

fn small(values: &[f64]) -> f64 {
    let mut acc = SmallAccumulator::new();
    acc.add_slice(values);
    acc.round()
}

fn large(values: &[f64]) -> f64 {
    let mut acc = LargeAccumulator::new();
    acc.add_slice(values);
    acc.round()
}

fn uniform(len: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random::<f64>()).collect()
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot-path latency for short batches (per-row reductions, residuals).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [(4, "4"), (16, "16"), (64, "64"), (256, "256")];

    for (size, name) in sizes {
        let input = uniform(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("small", name),
            &input,
            |b, data| b.iter(|| small(black_box(data))),
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("naive", name),
            &input,
            |b, data| b.iter(|| naive(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK STREAMS
// =============================================================================

/// Throughput for long streams, where the large accumulator's bucket
/// fast path should dominate.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(50);

    let sizes = [
        (4 * K, "4K"),
        (64 * K, "64K"),
        (K * K, "1M"),
        (16 * K * K, "16M"),
    ];

    for (size, name) in sizes {
        let input = uniform(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("large", name),
            &input,
            |b, data| b.iter(|| large(black_box(data))),
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("small", name),
            &input,
            |b, data| b.iter(|| small(black_box(data))),
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("kahan", name),
            &input,
            |b, data| b.iter(|| kahan(black_box(data))),
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("naive", name),
            &input,
            |b, data| b.iter(|| naive(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: ROUNDING COST
// =============================================================================

/// Cost of `round` as a function of live exponent buckets.
fn bench_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Round");

    let mut rng = rand::rng();
    let cases = [(1_u64, "1-bucket"), (64, "64-buckets"), (2046, "all-buckets")];

    for (spread, name) in cases {
        let input: Vec<f64> = (0..64 * K)
            .map(|_| {
                let exp = 1 + rng.random::<u64>() % spread;
                let mantissa = rng.random::<u64>() & ((1 << 52) - 1);
                f64::from_bits((exp << 52) | mantissa)
            })
            .collect();

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| {
                b.iter(|| {
                    let mut acc = LargeAccumulator::new();
                    acc.add_slice(black_box(data));
                    acc.round()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(benches, bench_latency, bench_bulk, bench_round);
criterion_main!(benches);
