//! Benchmark for OrderedMap vs standard BTreeMap.
//!
//! OrderedMap trades lookup speed for a plain linked layout; these numbers
//! show how far apart the two are at small and medium sizes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ordered_map::ordered::{CallbacksBuilder, OrderedMap};
use std::collections::BTreeMap;
use std::hint::black_box;

fn filled(size: i32) -> OrderedMap<i32, i32> {
    let mut map = OrderedMap::new();
    for index in 0..size {
        map.put(&index, &(index * 2)).unwrap();
    }
    map
}

// =============================================================================
// put Benchmark
// =============================================================================

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("put");

    for size in [100, 1000] {
        // Descending keys: every put splices at the head
        group.bench_with_input(
            BenchmarkId::new("OrderedMap/descending", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = OrderedMap::new();
                    for index in (0..size).rev() {
                        map.put(black_box(&index), black_box(&(index * 2))).unwrap();
                    }
                    black_box(map)
                });
            },
        );

        // Ascending keys: every put walks the whole list
        group.bench_with_input(
            BenchmarkId::new("OrderedMap/ascending", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = OrderedMap::new();
                    for index in 0..size {
                        map.put(black_box(&index), black_box(&(index * 2))).unwrap();
                    }
                    black_box(map)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = BTreeMap::new();
                    for index in 0..size {
                        map.insert(black_box(index), black_box(index * 2));
                    }
                    black_box(map)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000] {
        let ordered_map = filled(size);
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(
            BenchmarkId::new("OrderedMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for index in 0..size {
                        black_box(ordered_map.get(black_box(&index)));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for index in 0..size {
                        black_box(standard_map.get(black_box(&index)));
                    }
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Traversal Benchmark
// =============================================================================

fn benchmark_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal");

    for size in [100, 1000, 10000] {
        let ordered_map = filled(size);
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(
            BenchmarkId::new("OrderedMap/iter", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let sum: i64 = ordered_map.values().map(|value| i64::from(*value)).sum();
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("OrderedMap/copied_keys", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let sum: i64 = ordered_map
                        .copied_keys()
                        .map(|key| key.map_or(0, i64::from))
                        .sum();
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeMap", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let sum: i64 = standard_map.values().map(|value| i64::from(*value)).sum();
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Semantics Overhead Benchmark
// =============================================================================

fn benchmark_semantics(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("semantics");
    let size = 500;

    group.bench_function("Natural", |bencher| {
        bencher.iter(|| black_box(filled(black_box(size))));
    });

    group.bench_function("Callbacks", |bencher| {
        bencher.iter(|| {
            let callbacks = CallbacksBuilder::<i32, i32>::new()
                .copy_key(|key: &i32| Ok(*key))
                .copy_value(|value: &i32| Ok(*value))
                .free_key(drop)
                .free_value(drop)
                .compare(|left: &i32, right: &i32| left.cmp(right))
                .build()
                .unwrap();
            let mut map = OrderedMap::with_semantics(callbacks);
            for index in 0..black_box(size) {
                map.put(&index, &(index * 2)).unwrap();
            }
            black_box(map)
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_put,
    benchmark_get,
    benchmark_traversal,
    benchmark_semantics
);

criterion_main!(benches);
