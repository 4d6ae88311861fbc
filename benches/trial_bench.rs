//! Benchmarks for the trial runner and experiment driver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use monty_hall_sim::sim::{
    count_wins, run_trial, ExperimentConfig, ExperimentDriver, SecureSelector, SeededSelector,
    Strategy,
};

fn single_trial_benchmark(c: &mut Criterion) {
    let mut secure = SecureSelector::secure();
    c.bench_function("switch_trial_os_rng", |b| {
        b.iter(|| run_trial(&mut secure, black_box(true)).unwrap())
    });

    let mut seeded = SeededSelector::seeded(42);
    c.bench_function("switch_trial_std_rng", |b| {
        b.iter(|| run_trial(&mut seeded, black_box(true)).unwrap())
    });
}

fn batch_benchmark(c: &mut Criterion) {
    c.bench_function("stay_10000_trials", |b| {
        let mut selector = SecureSelector::secure();
        b.iter(|| count_wins(&mut selector, Strategy::Stay, black_box(10_000)).unwrap())
    });

    c.bench_function("driver_10000_batch_4_threads", |b| {
        let config = ExperimentConfig::default()
            .with_trial_counts(vec![10_000])
            .with_threads(4);
        let mut driver = ExperimentDriver::new(SecureSelector::secure(), config).unwrap();
        b.iter(|| driver.run_batch(black_box(10_000)).unwrap())
    });
}

criterion_group!(benches, single_trial_benchmark, batch_benchmark);
criterion_main!(benches);
