//! Benchmarks for the particle update step

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use tf_particles::{ParticleSystem, PhysicsParams, Scene, SimulationConfig};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [1_000usize, 30_000, 100_000] {
        let mut system = ParticleSystem::spawn(count, PhysicsParams::default(), Some(1)).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| system.step(black_box(1.0 / 60.0)))
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let config = SimulationConfig {
        seed: Some(1),
        ..SimulationConfig::default()
    };
    let mut scene = Scene::new(config).unwrap();

    c.bench_function("advance_default_scene", |b| {
        b.iter(|| black_box(scene.advance(black_box(1.0 / 60.0)).unwrap()))
    });
}

criterion_group!(benches, bench_step, bench_frame);
criterion_main!(benches);
