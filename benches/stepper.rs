//! Benchmarks for generation stepping.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use game_of_life::{
    compute::{Grid, Stepper, Universe, advance},
    schema::{Pattern, Seed},
};

fn bench_stepper_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepper_advance");

    for size in [64, 128, 256, 512, 1024] {
        let seed = Seed {
            pattern: Pattern::Noise {
                density: 0.3,
                seed: 42,
            },
        };

        let mut grid = seed.generate(size, size).unwrap();
        let mut stepper = Stepper::for_grid(&grid);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    stepper.advance(black_box(&mut grid));
                });
            },
        );
    }

    group.finish();
}

fn bench_pure_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("pure_advance");

    for size in [64, 256] {
        let grid: Grid = Seed::default().generate(size, size).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &grid,
            |b, grid| {
                b.iter(|| advance(black_box(grid)));
            },
        );
    }

    group.finish();
}

fn bench_universe_step(c: &mut Criterion) {
    let mut universe = Universe::create(128, 128).unwrap();

    c.bench_function("universe_step_128x128", |b| {
        b.iter(|| {
            universe.step();
            black_box(universe.read());
        });
    });
}

criterion_group!(
    benches,
    bench_stepper_advance,
    bench_pure_advance,
    bench_universe_step
);
criterion_main!(benches);
