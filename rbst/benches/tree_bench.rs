/// Insert / get / remove over trees built from shuffled versus sorted keys. Sorted insertion
/// produces a chain, so the gap between the two groups is the cost of imbalance.
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::seq::SliceRandom;
use rand::{Rng, rng};

use rbst::{BinarySearchTree, Record};

// Sorted trees degenerate to O(n) per operation, so sizes stay modest.
const TREE_SIZES: [usize; 3] = [1 << 8, 1 << 10, 1 << 12];

fn gen_keys(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("{i:08}")).collect()
}

fn shuffled(keys: &[String]) -> Vec<String> {
    let mut keys = keys.to_vec();
    keys.shuffle(&mut rng());
    keys
}

fn build(keys: &[String]) -> BinarySearchTree<Record> {
    keys.iter().map(Record::keyed).collect()
}

pub fn build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");
    for size in TREE_SIZES {
        let sorted = gen_keys(size);
        let random = shuffled(&sorted);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("random", size), &random, |b, keys| {
            b.iter(|| std::hint::black_box(build(keys)))
        });
        group.bench_with_input(BenchmarkId::new("sorted", size), &sorted, |b, keys| {
            b.iter(|| std::hint::black_box(build(keys)))
        });
    }
    group.finish();
}

pub fn rand_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_get");
    group.throughput(Throughput::Elements(1));
    for size in TREE_SIZES {
        let sorted = gen_keys(size);
        let random_tree = build(&shuffled(&sorted));
        let sorted_tree = build(&sorted);

        group.bench_with_input(BenchmarkId::new("random", size), &sorted, |b, keys| {
            let mut rng = rng();
            b.iter(|| {
                let key = &keys[rng.random_range(0..keys.len())];
                std::hint::black_box(random_tree.get(key));
            })
        });
        group.bench_with_input(BenchmarkId::new("sorted", size), &sorted, |b, keys| {
            let mut rng = rng();
            b.iter(|| {
                let key = &keys[rng.random_range(0..keys.len())];
                std::hint::black_box(sorted_tree.get(key));
            })
        });
    }
    group.finish();
}

pub fn remove_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_insert");
    group.throughput(Throughput::Elements(1));
    for size in TREE_SIZES {
        let keys = gen_keys(size);
        group.bench_with_input(BenchmarkId::new("random", size), &keys, |b, keys| {
            let mut tree = build(&shuffled(keys));
            let mut rng = rng();
            b.iter(|| {
                let key = &keys[rng.random_range(0..keys.len())];
                if let Some(record) = tree.remove(key) {
                    tree.insert(record);
                }
            })
        });
    }
    group.finish();
}

pub fn traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    for size in TREE_SIZES {
        let tree = build(&shuffled(&gen_keys(size)));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("in_order", size), |b| {
            b.iter(|| {
                let mut count = 0usize;
                tree.in_order(|_| count += 1);
                std::hint::black_box(count);
            })
        });
    }
    group.finish();
}

criterion_group!(tree_benches, build_tree, rand_get, remove_insert, traverse);
criterion_main!(tree_benches);
