//! Criterion benchmarks for circle polygonisation and scene rendering.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use shapes::{Circle, Recorder, Scene, SvgSurface, Triangle};

fn random_scene(n: usize, seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pt = move || Vector2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
    let mut scene = Scene::new();
    for k in 0..n {
        if k % 2 == 0 {
            scene.push(Triangle::new(pt(), pt(), pt()));
        } else {
            scene.push(Circle::with_default_sides(pt(), 1.0));
        }
    }
    scene
}

fn bench_polygonize(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygonize");
    for &sides in &[4u32, 50, 200, 1000] {
        group.bench_with_input(BenchmarkId::new("circle_vertices", sides), &sides, |b, &s| {
            let circle = Circle::new(Vector2::new(0.5, -0.5), 2.0, s).unwrap();
            b.iter(|| circle.vertices())
        });
    }
    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");
    for &n in &[10usize, 100] {
        let scene = random_scene(n, 43);
        group.bench_with_input(BenchmarkId::new("record", n), &scene, |b, scene| {
            b.iter(|| {
                let mut rec = Recorder::new();
                scene.render(&mut rec);
                rec
            })
        });
        group.bench_with_input(BenchmarkId::new("svg", n), &scene, |b, scene| {
            b.iter(|| {
                let mut svg = SvgSurface::new();
                scene.render(&mut svg);
                svg.to_svg()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygonize, bench_scene);
criterion_main!(benches);
