//! Criterion benchmarks for the predicate kernel.
//! Focus: throughput of the interval filter, and the cost of escalating to
//! exact arithmetic on cocircular/collinear input.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pd_delaunay::{Kernel, Point};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_point(rng: &mut StdRng) -> Point<f64> {
    Point::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0))
}

fn bench_orientation(c: &mut Criterion) {
    let mut group = c.benchmark_group("orientation");
    let mut rng = StdRng::seed_from_u64(7);
    let pts: Vec<_> = (0..300).map(|_| random_point(&mut rng)).collect();
    let k = Kernel::new();

    group.bench_function(BenchmarkId::new("generic_points", pts.len()), |b| {
        b.iter(|| {
            let mut last = pd_delaunay::Orientation::Collinear;
            for w in pts.windows(3) {
                last = k.orientation(w[0], w[1], w[2]);
            }
            last
        })
    });

    // Collinear input forces every call through the exact fallback.
    let collinear: Vec<_> = (0..300)
        .map(|i| Point::new(i as f64, i as f64))
        .collect();
    group.bench_function("collinear_forces_exact_fallback", |b| {
        b.iter(|| {
            let mut last = pd_delaunay::Orientation::Collinear;
            for w in collinear.windows(3) {
                last = k.orientation(w[0], w[1], w[2]);
            }
            last
        })
    });

    group.finish();
}

fn bench_side_of_oriented_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("side_of_oriented_circle");
    let mut rng = StdRng::seed_from_u64(11);
    let pts: Vec<_> = (0..300).map(|_| random_point(&mut rng)).collect();
    let k = Kernel::new();

    group.bench_function("generic_points", |b| {
        b.iter(|| {
            let mut last = pd_delaunay::OrientedSide::OnBoundary;
            for w in pts.windows(4) {
                last = k.side_of_oriented_circle(w[0], w[1], w[2], w[3]);
            }
            last
        })
    });

    group.finish();
}

criterion_group!(benches, bench_orientation, bench_side_of_oriented_circle);
criterion_main!(benches);
