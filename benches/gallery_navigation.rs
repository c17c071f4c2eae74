// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery operations.
//!
//! Measures the performance of:
//! - Shuffling the display order
//! - Cursor navigation (full wrap-around cycle)
//! - Elapsed-time breakdown computation

use criterion::{criterion_group, criterion_main, Criterion};
use keepsake::elapsed::Breakdown;
use keepsake::gallery::{shuffle, Cursor};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::path::PathBuf;

fn catalog(len: usize) -> Vec<PathBuf> {
    (0..len)
        .map(|i| PathBuf::from(format!("{i:05}.jpg")))
        .collect()
}

/// Benchmark the Fisher–Yates shuffle over a large catalog.
fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery");

    let sources = catalog(10_000);
    group.bench_function("shuffle_10k", |b| {
        b.iter(|| {
            let mut order = sources.clone();
            let mut rng = StdRng::seed_from_u64(42);
            shuffle::fisher_yates(&mut order, &mut rng);
            black_box(&order);
        });
    });

    group.finish();
}

/// Benchmark a full wrap-around cycle of cursor navigation.
fn bench_cursor_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery");

    const LEN: usize = 10_000;
    group.bench_function("cursor_full_cycle_10k", |b| {
        b.iter(|| {
            let mut cursor = Cursor::at(0, LEN).unwrap();
            for _ in 0..LEN {
                cursor = cursor.advanced();
            }
            black_box(cursor.index());
        });
    });

    group.finish();
}

/// Benchmark the per-tick breakdown computation.
fn bench_breakdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter");

    let anchor: chrono::NaiveDateTime = "2023-12-10T00:00:00".parse().unwrap();
    let now: chrono::NaiveDateTime = "2026-08-05T12:30:45".parse().unwrap();

    group.bench_function("breakdown_between", |b| {
        b.iter(|| {
            black_box(Breakdown::between(black_box(anchor), black_box(now)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_shuffle, bench_cursor_cycle, bench_breakdown);
criterion_main!(benches);
