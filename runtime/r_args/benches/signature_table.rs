//! Signature table benchmarks.
//!
//! Measures the hit path (known shape), the dense empty-signature path and
//! contended lookups from several threads.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use r_args::SignatureTable;
use rayon::prelude::*;

fn call_shape(arity: usize) -> Vec<Option<String>> {
    (0..arity)
        .map(|i| (i % 2 == 0).then(|| format!("arg{i}")))
        .collect()
}

fn bench_known_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature_table/get_known");
    let table = SignatureTable::new();

    for arity in [1, 4, 8, 16] {
        let names = call_shape(arity);
        let _ = table.get(&names);
        group.bench_with_input(BenchmarkId::from_parameter(arity), &names, |b, names| {
            b.iter(|| black_box(table.get(black_box(names))));
        });
    }

    group.finish();
}

fn bench_empty(c: &mut Criterion) {
    let table = SignatureTable::new();
    c.bench_function("signature_table/empty_cached", |b| {
        b.iter(|| black_box(table.empty(black_box(7))));
    });
}

fn bench_contended(c: &mut Criterion) {
    let table = SignatureTable::new();
    let shapes: Vec<_> = (0..256).map(|i| call_shape(i % 12)).collect();
    c.bench_function("signature_table/par_get", |b| {
        b.iter(|| {
            shapes.par_iter().for_each(|names| {
                black_box(table.get(names));
            });
        });
    });
}

criterion_group!(benches, bench_known_shape, bench_empty, bench_contended);
criterion_main!(benches);
