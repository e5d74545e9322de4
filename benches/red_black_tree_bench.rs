//! Benchmark for RedBlackTree vs standard BTreeMap.
//!
//! Compares sentree's RedBlackTree against Rust's standard BTreeMap for
//! insert, lookup and delete.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sentree::RedBlackTree;
use std::collections::BTreeMap;
use std::hint::black_box;

/// Deterministic scrambled key order, so inserts do not arrive sorted.
fn scrambled_keys(size: u64) -> Vec<u64> {
    (0..size)
        .map(|index| index.wrapping_mul(0x9E37_79B9_7F4A_7C15) % (size * 4))
        .collect()
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100, 1000, 10000] {
        let keys = scrambled_keys(size);

        group.bench_with_input(BenchmarkId::new("RedBlackTree", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut tree = RedBlackTree::new();
                for &key in keys {
                    tree.insert(black_box(key), black_box(key * 2));
                }
                black_box(tree)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for &key in keys {
                    map.insert(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let keys = scrambled_keys(size);
        let tree: RedBlackTree<u64, u64> = keys.iter().map(|&key| (key, key * 2)).collect();
        let map: BTreeMap<u64, u64> = keys.iter().map(|&key| (key, key * 2)).collect();

        group.bench_with_input(BenchmarkId::new("RedBlackTree", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut sum = 0_u64;
                for key in keys {
                    if let Some(&value) = tree.get(black_box(key)) {
                        sum = sum.wrapping_add(value);
                    }
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut sum = 0_u64;
                for key in keys {
                    if let Some(&value) = map.get(black_box(key)) {
                        sum = sum.wrapping_add(value);
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// delete Benchmark
// =============================================================================

fn benchmark_delete(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("delete");

    for size in [100, 1000, 10000] {
        let keys = scrambled_keys(size);
        let tree: RedBlackTree<u64, u64> = keys.iter().map(|&key| (key, key)).collect();
        let map: BTreeMap<u64, u64> = keys.iter().map(|&key| (key, key)).collect();

        group.bench_with_input(BenchmarkId::new("RedBlackTree", size), &keys, |bencher, keys| {
            bencher.iter_batched(
                || tree.clone(),
                |mut tree| {
                    for key in keys {
                        black_box(tree.delete(key));
                    }
                    tree
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter_batched(
                || map.clone(),
                |mut map| {
                    for key in keys {
                        black_box(map.remove(key));
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_get, benchmark_delete);
criterion_main!(benches);
