use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minefield_core::{GameConfig, Grid, MinefieldGenerator, Position, RandomGenerator};
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in [
        ("beginner", GameConfig::beginner()),
        ("intermediate", GameConfig::intermediate()),
        ("expert", GameConfig::expert()),
        ("huge", GameConfig::new(256, 256, 13_000).unwrap()),
    ] {
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(RandomGenerator::new(seed).generate(black_box(config)))
            })
        });
    }
    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");
    for side in [16u16, 64, 256] {
        // a single corner mine leaves one zero region covering almost the whole board
        let grid = Grid::from_mine_positions(side, side, &[Position::new(0, 0)]).unwrap();
        let center = Position::new(side / 2, side / 2);
        group.bench_function(format!("open_{side}x{side}"), |b| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| black_box(grid.reveal(center).unwrap()),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_cascade);
criterion_main!(benches);
