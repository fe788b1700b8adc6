use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avl_multiset::{AvlMultiset, MinHeap};

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("multiset_insert", |b| {
        let mut multiset = AvlMultiset::new();
        b.iter(|| {
            for value in &values {
                multiset.insert(*value);
            }
        })
    });

    let mut multiset = AvlMultiset::new();
    for value in &values {
        multiset.insert(*value);
    }

    c.bench_function("multiset_contains", |b| {
        b.iter(|| {
            for value in &values {
                black_box(multiset.contains(value));
            }
        })
    });

    c.bench_function("multiset_find_min", |b| {
        b.iter(|| black_box(multiset.find_min()))
    });

    c.bench_function("multiset_iter", |b| {
        b.iter(|| {
            for value in &multiset {
                black_box(value);
            }
        })
    });

    c.bench_function("multiset_remove", |b| {
        let mut multiset = multiset.clone();
        b.iter(|| {
            for value in &values {
                let _ = multiset.remove(value);
            }
        })
    });

    c.bench_function("heap_add_remove", |b| {
        b.iter(|| {
            let mut heap = MinHeap::new();
            for value in &values {
                heap.add(*value);
            }
            while heap.remove().is_ok() {}
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
