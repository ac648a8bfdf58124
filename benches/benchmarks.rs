//! Performance benchmarks for ftop

use std::hint::black_box;
use std::time::{Duration, SystemTime};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ftop::test_utils::TestTree;
use ftop::{Entry, OrderingPolicy, SortKey, TopKSelector, Traverser, WalkError, WalkerConfig};

/// Deterministic pseudo-random entries so runs are comparable.
fn make_entries(count: usize) -> Vec<Entry> {
    let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..count)
        .map(|i| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(seed % 1_000_000_000);
            Entry::new(format!("/bench/dir_{}/file_{:x}", i % 64, seed), seed % 10_000_000, modified)
        })
        .collect()
}

fn create_test_tree(file_count: usize) -> TestTree {
    let tree = TestTree::new();
    for i in 0..file_count {
        tree.add_sized(&format!("dir_{}/sub_{}/file_{}.bin", i % 10, i % 7, i), i % 4096);
    }
    tree
}

fn bench_selector_insert(c: &mut Criterion) {
    let entries = make_entries(100_000);
    let mut group = c.benchmark_group("selector_insert");

    for limit in [10, 100, 1000] {
        for key in SortKey::ALL {
            group.bench_with_input(
                BenchmarkId::new(key.as_str(), limit),
                &limit,
                |b, &limit| {
                    b.iter(|| {
                        let mut selector = TopKSelector::new(OrderingPolicy::new(key, false), limit);
                        for entry in &entries {
                            selector.insert(entry.clone());
                        }
                        black_box(selector.totals())
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let small = create_test_tree(100);
    let large = create_test_tree(2_000);
    let traverser = Traverser::new(WalkerConfig::default()).unwrap();

    let mut group = c.benchmark_group("walk");

    group.bench_function("tree_100_files", |b| {
        b.iter(|| {
            let mut selector = TopKSelector::new(OrderingPolicy::default(), 10);
            let mut errors: Vec<WalkError> = Vec::new();
            traverser.walk(black_box(small.path()), &mut selector, &mut errors);
            black_box(selector.totals())
        })
    });

    group.bench_function("tree_2000_files", |b| {
        b.iter(|| {
            let mut selector = TopKSelector::new(OrderingPolicy::default(), 10);
            let mut errors: Vec<WalkError> = Vec::new();
            traverser.walk(black_box(large.path()), &mut selector, &mut errors);
            black_box(selector.totals())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_selector_insert, bench_walk);
criterion_main!(benches);
