//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Separates path generation from aggregation so regressions can be
//! attributed to the right half of a run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pricer_models::models::GbmParams;
use pricer_pricing::mc::{aggregate, generate_gbm_paths, simulate, PathMatrix};
use pricer_pricing::rng::PricerRng;

fn bench_path_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_generation");
    let params = GbmParams::default();

    for n_paths in [1_000, 10_000] {
        let mut matrix = PathMatrix::new(n_paths, 252);
        group.throughput(Throughput::Elements((n_paths * 252) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_paths), &n_paths, |b, _| {
            b.iter(|| {
                let mut rng = PricerRng::from_seed(42);
                generate_gbm_paths(&mut matrix, black_box(&params), &mut rng);
            })
        });
    }

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    let params = GbmParams::default();

    for n_paths in [1_000, 10_000] {
        let mut template = PathMatrix::new(n_paths, 252);
        generate_gbm_paths(&mut template, &params, &mut PricerRng::from_seed(42));

        group.bench_with_input(BenchmarkId::from_parameter(n_paths), &template, |b, t| {
            b.iter_batched_ref(
                || t.clone(),
                |matrix| aggregate(matrix, 100.0, 50, 42),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    group.sample_size(10);

    group.bench_function("10k_paths_252_steps", |b| {
        b.iter(|| simulate(100.0, 0.08, 0.2, black_box(10_000), 252, 1.0 / 252.0, 50, 42))
    });

    group.finish();
}

criterion_group!(benches, bench_path_generation, bench_aggregation, bench_simulate);
criterion_main!(benches);
