//! Search Performance Benchmark
//!
//! Measures the letter-count function on dense and run-compressed inputs
//! and the end-to-end chain search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fourchain::{compute_length, find_lin, minimal_chain, PeriodList};
use num_bigint::BigUint;

fn benchmark_length(c: &mut Criterion) {
    c.bench_function("length_dense_small", |b| {
        let x = PeriodList::from_integer(123_456_789u64);
        b.iter(|| {
            let letters = compute_length(black_box(&x));
            black_box(letters);
        });
    });

    c.bench_function("length_compressed_tail", |b| {
        let x = PeriodList::from_notation("[001]{5}103323[373]{4664040982447497675590741019}")
            .unwrap();
        b.iter(|| {
            let letters = compute_length(black_box(&x));
            black_box(letters);
        });
    });
}

fn benchmark_search(c: &mut Criterion) {
    c.bench_function("lin_323", |b| {
        let target = BigUint::from(323u32);
        b.iter(|| {
            let x = find_lin(black_box(&target)).unwrap();
            black_box(x);
        });
    });

    c.bench_function("minimal_chain_9", |b| {
        b.iter(|| {
            let chain = minimal_chain(black_box(9)).unwrap();
            black_box(chain);
        });
    });
}

criterion_group!(benches, benchmark_length, benchmark_search);
criterion_main!(benches);
