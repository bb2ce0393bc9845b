//! Criterion benchmarks for scoring and whole evolution runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use genexpr::evaluator::ArithmeticEvaluator;
use genexpr::fitness::FitnessFunction;
use genexpr::population::{EvolutionConfig, EvolutionRunner, Population, SelectionScheme};
use genexpr::random::create_rng;

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let fitness = FitnessFunction::arithmetic(42);

    for &size in &[100usize, 1000, 5000] {
        let mut rng = create_rng(42);
        let population = Population::random(size, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &population, |b, p| {
            b.iter(|| black_box(p.rank(&fitness, SelectionScheme::Ramp, false)))
        });
    }
    group.finish();
}

fn bench_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolution");
    group.sample_size(10);

    for (pop, gen) in [(100usize, 50usize), (1000, 20)] {
        let config = EvolutionConfig::default()
            .with_population_size(pop)
            .with_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = EvolutionRunner::run(black_box(c), 123, ArithmeticEvaluator);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_rank, bench_evolution);
criterion_main!(benches);
