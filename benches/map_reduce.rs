use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sequence_ops::types::Sequence;

fn bench_map_reduce(c: &mut Criterion) {
    let seq: Sequence<i64> = (0..10_000).collect();

    c.bench_function("map_10k", |b| {
        b.iter(|| black_box(seq.map_elements(|v| v * 2).len()))
    });

    c.bench_function("filter_10k", |b| {
        b.iter(|| black_box(seq.filter_elements(|v| v % 2 == 0).len()))
    });

    c.bench_function("fold_10k", |b| {
        b.iter(|| black_box(seq.fold_elements(0i64, |acc, v| acc + v)))
    });

    c.bench_function("filter_map_fold_10k", |b| {
        b.iter(|| {
            let kept = seq.filter_elements(|v| v % 2 == 0);
            let doubled = kept.map_elements(|v| v * 2);
            black_box(doubled.fold_elements(0i64, |acc, v| acc + v))
        })
    });
}

criterion_group!(benches, bench_map_reduce);
criterion_main!(benches);
