//! Criterion benchmarks for 2D membership queries.
//! Focus sizes: n in {4, 16, 64, 256}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use polypip::api::{
    draw_convex_radial, draw_star_radial, inside_convex, inside_even_odd, test, Orientation,
    PolygonReplay, RadialCfg, VertexCount,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn cfg(n: usize, radial_jitter: f64) -> RadialCfg {
    RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        radial_jitter,
        ..RadialCfg::default()
    }
}

fn random_point(rng: &mut StdRng) -> Vector2<f64> {
    Vector2::new(rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5))
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    for &n in &[4usize, 16, 64, 256] {
        let convex = draw_convex_radial(cfg(n, 0.1), PolygonReplay { seed: 43, index: 0 })
            .expect("convex hull");
        let star = draw_star_radial(cfg(n, 0.6), PolygonReplay { seed: 44, index: 0 });
        let mut rng = StdRng::seed_from_u64(45);

        group.bench_with_input(BenchmarkId::new("inside_convex", n), &convex, |b, poly| {
            b.iter_batched(
                || random_point(&mut rng),
                |p| inside_convex(p, poly, Orientation::Ccw),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("test_convex", n), &convex, |b, poly| {
            b.iter_batched(
                || random_point(&mut rng),
                |p| test(p, poly),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("test_star", n), &star, |b, poly| {
            b.iter_batched(
                || random_point(&mut rng),
                |p| test(p, poly),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("even_odd_star", n), &star, |b, poly| {
            b.iter_batched(
                || random_point(&mut rng),
                |p| inside_even_odd(p, poly),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_membership);
criterion_main!(benches);
