//! Criterion micro-benchmarks for push, insertion, erase, and iteration,
//! each paired with the same workload on `std::vec::Vec`.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use simple_vector::DynamicArray;
use simple_vector_bench::{filled, insertion_positions};

const N: usize = 1_000;

/// Benchmark: 1000 pushes from empty, exercising every doubling step.
fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_1k");
    group.bench_function("dynamic_array", |b| {
        b.iter(|| {
            let mut v = DynamicArray::new();
            for i in 0..N as u64 {
                v.push(black_box(i));
            }
            v
        })
    });
    group.bench_function("std_vec", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for i in 0..N as u64 {
                v.push(black_box(i));
            }
            v
        })
    });
    group.finish();
}

/// Benchmark: 1000 pushes into a container reserved up front.
fn bench_push_reserved(c: &mut Criterion) {
    c.bench_function("push_1k_reserved", |b| {
        b.iter(|| {
            let mut v = DynamicArray::with_capacity(N);
            for i in 0..N as u64 {
                v.push(black_box(i));
            }
            v
        })
    });
}

/// Benchmark: 1000 insertions at scattered positions.
fn bench_insert(c: &mut Criterion) {
    let positions = insertion_positions(N);
    let mut group = c.benchmark_group("insert_scattered_1k");
    group.bench_function("dynamic_array", |b| {
        b.iter(|| {
            let mut v = DynamicArray::new();
            for (i, &at) in positions.iter().enumerate() {
                v.insert(at, black_box(i as u64)).unwrap();
            }
            v
        })
    });
    group.bench_function("std_vec", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for (i, &at) in positions.iter().enumerate() {
                v.insert(at, black_box(i as u64));
            }
            v
        })
    });
    group.finish();
}

/// Benchmark: drain a 1000-element container from the front with erase.
fn bench_erase_front(c: &mut Criterion) {
    c.bench_function("erase_front_1k", |b| {
        b.iter_batched(
            || filled(N),
            |mut v| {
                while !v.is_empty() {
                    black_box(v.erase(0));
                }
                v
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

/// Benchmark: sum 1000 elements through the borrowing iterator.
fn bench_iter(c: &mut Criterion) {
    let v = filled(N);
    let std_v: Vec<u64> = (0..N as u64).collect();
    let mut group = c.benchmark_group("iter_sum_1k");
    group.bench_function("dynamic_array", |b| {
        b.iter(|| black_box(&v).iter().sum::<u64>())
    });
    group.bench_function("std_vec", |b| {
        b.iter(|| black_box(&std_v).iter().sum::<u64>())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_push_reserved,
    bench_insert,
    bench_erase_front,
    bench_iter
);
criterion_main!(benches);
