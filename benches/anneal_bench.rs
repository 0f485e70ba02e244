//! Criterion benchmarks for tsp-anneal.
//!
//! Uses the built-in 131-point set to measure tour evaluation, the 2-opt
//! move, and short annealing runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_anneal::sa::SaConfig;
use tsp_anneal::tsp::{benchmark_points, solve_seeded, tour_length, two_opt_swap};

fn bench_tour_length(c: &mut Criterion) {
    let points = benchmark_points().unwrap();
    let tour: Vec<usize> = (0..points.len()).collect();
    c.bench_function("tour_length_131", |b| {
        b.iter(|| black_box(tour_length(black_box(&tour), black_box(&points))))
    });
}

fn bench_two_opt(c: &mut Criterion) {
    let tour: Vec<usize> = (0..131).collect();
    c.bench_function("two_opt_swap_131", |b| {
        b.iter(|| black_box(two_opt_swap(black_box(&tour), 20, 110)))
    });
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_131");
    group.sample_size(10);

    let points = benchmark_points().unwrap();
    for &steps in &[10usize, 50, 200] {
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_cooling_rate(0.97)
            .with_iterations_per_temperature(points.len() * 5)
            .with_cooling_steps(steps)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(steps), &config, |b, config| {
            b.iter(|| {
                let result = solve_seeded(black_box(&points), black_box(config));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tour_length, bench_two_opt, bench_anneal);
criterion_main!(benches);
