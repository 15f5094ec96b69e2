//! Benchmarks for DynamicArray vs Vec
//!
//! Run with: `cargo bench --bench dynamic_array`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dynamic_array::array::DynamicArray;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                for i in 0..size {
                    array.push(black_box(i as u64));
                }
                black_box(array);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size {
                    vec.push(black_box(i as u64));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_push_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_reserved");

    // Reserving up front skips every reallocation.
    for size in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut array = DynamicArray::with_capacity(size);
                for i in 0..size {
                    array.push(black_box(i as u64));
                }
                black_box(array);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::with_capacity(size);
                for i in 0..size {
                    vec.push(black_box(i as u64));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for size in [16, 256, 4096] {
        let array: DynamicArray<String> = (0..size).map(|i| i.to_string()).collect();
        let vec: Vec<String> = (0..size).map(|i| i.to_string()).collect();

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &array, |b, array| {
            b.iter(|| black_box(array.clone()));
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &vec, |b, vec| {
            b.iter(|| black_box(vec.clone()));
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [256, 4096] {
        // Deterministic pseudo-random input.
        let input: Vec<u32> = (0..size as u32).map(|i| i.wrapping_mul(2_654_435_761)).collect();

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &input, |b, input| {
            b.iter(|| {
                let mut array: DynamicArray<_> = DynamicArray::from(&input[..]);
                array.sort_unstable();
                black_box(array);
            });
        });
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");

    for size in [256, 4096] {
        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                array.resize(size, black_box(7u64));
                array.resize(size / 2, 0);
                black_box(array);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_push_reserved,
    bench_clone,
    bench_sort,
    bench_resize,
);
criterion_main!(benches);
