//! Benchmarks for the CPU simulation step and the link scan.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use driftfield::prelude::*;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [15, 100] {
        let config = FieldConfig::default().with_count(count).with_seed(1);
        let mut field = ParticleField::new(config, 1920.0, 1080.0);
        let pointer = Some(Vec2::new(960.0, 540.0));

        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| {
                field.step(black_box(pointer), black_box(1.0));
            })
        });
    }

    group.finish();
}

fn bench_links(c: &mut Criterion) {
    let mut group = c.benchmark_group("proximity_links");

    for count in [15, 100] {
        let config = FieldConfig::default().with_count(count).with_seed(1);
        let field = ParticleField::new(config, 1920.0, 1080.0);

        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| black_box(field.links()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step, bench_links);
criterion_main!(benches);
