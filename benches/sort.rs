use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sequence_ops::types::Sequence;

/// Deterministic pseudo-random input (LCG), so runs are comparable.
fn shuffled(n: usize) -> Vec<i64> {
    let mut state: u64 = 0x9E37_79B9;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as i64
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("exchange_sort");

    for &n in &[64usize, 256, 1024] {
        let input = shuffled(n);

        group.bench_function(format!("default/{n}"), |b| {
            b.iter(|| {
                let mut seq = Sequence::new(black_box(input.clone()));
                seq.sort_elements();
                black_box(seq.len())
            })
        });

        group.bench_function(format!("comparator/{n}"), |b| {
            b.iter(|| {
                let mut seq = Sequence::new(black_box(input.clone()));
                seq.sort_elements_by(|a, b| if a < b { -1 } else { i32::from(a > b) });
                black_box(seq.len())
            })
        });

        group.bench_function(format!("to_sorted/{n}"), |b| {
            let seq = Sequence::new(input.clone());
            b.iter(|| black_box(seq.to_sorted().len()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
