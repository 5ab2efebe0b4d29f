use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use vrptw_optimizer::{
    generator::{CaseType, GeneratorParams, generate},
    parsers::flat_file::parse,
    piecewise::{Piece, PiecewiseFunction},
    problem::instance::Instance,
    solver::{
        construction::construct_solution::construct_solution, ls::neighborhood::generate_neighbors,
        objective::ObjectiveParams, penalty::route_penalty,
    },
};

fn generated_instance(case_type: u32) -> Instance {
    let text = generate(&GeneratorParams::new(100, 10, CaseType::new(case_type), 17));
    parse(&text).unwrap().build().unwrap()
}

fn piecewise_benchmark(c: &mut Criterion) {
    let f = (0..20).fold(PiecewiseFunction::zero(), |f, i| {
        f.add_piece(&Piece::new(i * 50, i * 50 + 30, 1))
    });
    let g = PiecewiseFunction::penalty(100, 400, 1);

    c.bench_function("piecewise add", |b| {
        b.iter(|| black_box(&f).add(black_box(&g)))
    });

    c.bench_function("piecewise shift + min", |b| {
        b.iter(|| black_box(&f).shift(-25).min())
    });
}

fn penalty_benchmark(c: &mut Criterion) {
    let instance = generated_instance(3);
    let solution = construct_solution(&instance).unwrap();

    c.bench_function("route penalty (all routes)", |b| {
        b.iter(|| {
            solution
                .routes()
                .iter()
                .map(|route| route_penalty(&instance, black_box(route), 1))
                .sum::<i64>()
        })
    });

    let objective = ObjectiveParams::default();
    c.bench_function("evaluate solution", |b| {
        b.iter(|| objective.evaluate(&instance, black_box(&solution)))
    });
}

fn neighborhood_benchmark(c: &mut Criterion) {
    let instance = generated_instance(10);
    let solution = construct_solution(&instance).unwrap();

    let mut group = c.benchmark_group("neighborhood");
    group.sample_size(10);
    group.bench_function("generate neighbors", |b| {
        b.iter(|| generate_neighbors(&instance, black_box(&solution)).len())
    });
    group.finish();
}

criterion_group!(
    benches,
    piecewise_benchmark,
    penalty_benchmark,
    neighborhood_benchmark
);
criterion_main!(benches);
