//! Criterion benchmarks for pricer_core aggregation primitives.
//!
//! Measures sorting, nearest-rank lookup and histogram construction across
//! the sample sizes a simulation typically produces per time step.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::{nearest_rank, sort_ascending, DistributionSummary, Histogram};

/// Deterministic, roughly lognormal-looking sample without pulling in an RNG.
fn generate_sample(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let x = (i as f64 * 0.618_033_988_749_895).fract() - 0.5;
            100.0 * (0.4 * x).exp()
        })
        .collect()
}

fn bench_sort_and_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_rank");

    for size in [1_000, 10_000, 100_000] {
        let sample = generate_sample(size);
        group.bench_with_input(BenchmarkId::new("sort_then_rank", size), &sample, |b, s| {
            b.iter(|| {
                let mut buffer = s.clone();
                sort_ascending(&mut buffer);
                let p05 = nearest_rank(&buffer, 0.05);
                let p95 = nearest_rank(&buffer, 0.95);
                black_box((p05, p95))
            });
        });
    }

    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    for size in [1_000, 10_000, 100_000] {
        let mut sample = generate_sample(size);
        sort_ascending(&mut sample);
        let summary = DistributionSummary::from_sorted(&sample).unwrap();

        group.bench_with_input(BenchmarkId::new("50_bins", size), &sample, |b, s| {
            b.iter(|| Histogram::from_values(black_box(s), &summary, 50).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort_and_rank, bench_histogram);
criterion_main!(benches);
