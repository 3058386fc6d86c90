//! SHISHUA Criterion Benchmark
//!
//! Single-value latency, bulk throughput and comparison with `rand`'s
//! generators.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};
use shishua::kernels::portable::ShishuaState;
use shishua::{Shishua, BLOCK_SIZE, SEED_SIZE};
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency: one word, one block, one raw diffusion step.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");
    let mut rng = Shishua::from_seed_bytes(&[0x5Au8; SEED_SIZE]);

    group.throughput(Throughput::Bytes(8));
    group.bench_function("next_u64", |b| b.iter(|| black_box(rng.next_u64())));

    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));
    group.bench_function("next_block", |b| b.iter(|| black_box(rng.next_block())));

    let mut state = rng.state().clone();
    group.bench_function("shuffle", |b| {
        b.iter(|| {
            state.shuffle();
            black_box(state.output()[0])
        })
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK FILL
// =============================================================================

/// Bulk byte throughput across buffer sizes.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk-Fill");

    let sizes = [
        (BLOCK_SIZE, "128B"),
        (KB, "1KB"),
        (64 * KB, "64KB"),
        (MB, "1MB"),
        (16 * MB, "16MB"),
    ];

    for (size, name) in sizes {
        let mut rng = Shishua::from_seed_bytes(&[0x5Au8; SEED_SIZE]);
        let mut buf = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| rng.fill_bytes(black_box(&mut buf)).unwrap())
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: COMPARISON
// =============================================================================

/// SHISHUA vs `rand`'s `StdRng` (ChaCha12) and `SmallRng` (Xoshiro256++).
fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Comparison");
    let size = MB;
    group.throughput(Throughput::Bytes(size as u64));

    let mut buf = vec![0u8; size];

    let mut shishua = Shishua::from_seed_bytes(&[0x5Au8; SEED_SIZE]);
    group.bench_function("SHISHUA", |b| {
        b.iter(|| shishua.fill_bytes(black_box(&mut buf)).unwrap())
    });

    let mut std_rng = StdRng::seed_from_u64(0x5A);
    group.bench_function("StdRng", |b| {
        b.iter(|| std_rng.fill_bytes(black_box(&mut buf)))
    });

    let mut small_rng = SmallRng::seed_from_u64(0x5A);
    group.bench_function("SmallRng", |b| {
        b.iter(|| small_rng.fill_bytes(black_box(&mut buf)))
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 4: SEEDING
// =============================================================================

/// Construction cost: derivation plus thirteen warm-up rounds.
fn bench_seeding(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Seeding");
    let entropy = [0x5Au8; SEED_SIZE];

    group.bench_function("from_seed_bytes", |b| {
        b.iter(|| Shishua::from_seed_bytes(black_box(&entropy)))
    });
    group.bench_function("seeded_state", |b| {
        b.iter(|| ShishuaState::seeded(black_box(&[1, 2, 3, 4]), 13))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_comparison,
    bench_seeding
);
criterion_main!(benches);
