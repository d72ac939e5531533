use conway_core::{GridState, LifeEngine, DEFAULT_DENSITY};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    let engine = LifeEngine::new();
    for size in [64usize, 256, 512] {
        let mut rng = ChaCha8Rng::seed_from_u64(0xFACA_DE00 + size as u64);
        let mut grid = GridState::new(size);
        engine
            .seed_random(&mut grid, DEFAULT_DENSITY, &mut rng)
            .expect("default density is valid");
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| engine.advance(&mut grid),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_seed(c: &mut Criterion) {
    let engine = LifeEngine::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut grid = GridState::new(256);
    c.bench_function("seed_random 256x256", |b| {
        b.iter(|| engine.seed_random(&mut grid, DEFAULT_DENSITY, &mut rng))
    });
}

criterion_group!(benches, bench_advance, bench_seed);
criterion_main!(benches);
