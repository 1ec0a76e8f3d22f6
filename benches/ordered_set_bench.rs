//! Benchmarks comparing sequential and fork-join set construction.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wordset::persistent::{OrderedSet, parallel};

/// Synthetic vocabulary with heavy duplication, shaped like tokenized prose.
fn sample_words(count: usize, vocabulary: usize) -> Vec<String> {
    (0..count)
        .map(|index| format!("word{:05}", (index * 7_919) % vocabulary))
        .collect()
}

fn bench_sequential_fold(criterion: &mut Criterion) {
    let words = sample_words(10_000, 2_000);
    criterion.bench_function("sequential_fold_10k", |bencher| {
        bencher.iter(|| {
            black_box(
                words
                    .iter()
                    .cloned()
                    .collect::<OrderedSet<String>>(),
            )
        });
    });
}

fn bench_parallel_build(criterion: &mut Criterion) {
    let words = sample_words(10_000, 2_000);
    criterion.bench_function("parallel_build_10k", |bencher| {
        bencher.iter(|| black_box(parallel::build(words.iter().cloned())));
    });
}

fn bench_merge(criterion: &mut Criterion) {
    let left: OrderedSet<String> = sample_words(5_000, 1_000).into_iter().collect();
    let right: OrderedSet<String> = sample_words(5_000, 1_500).into_iter().collect();
    criterion.bench_function("merge_1k_into_1k", |bencher| {
        bencher.iter(|| black_box(left.merge(&right)));
    });
}

criterion_group!(
    benches,
    bench_sequential_fold,
    bench_parallel_build,
    bench_merge
);
criterion_main!(benches);
