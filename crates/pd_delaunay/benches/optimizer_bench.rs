//! Criterion benchmark for the flip-based optimizer.
//! Focus: repeated optimize() calls against a mesh that needs one flip
//! versus one that is already optimal, since the two differ only in the
//! cost of the single flip plus its neighbor re-enqueue.

use criterion::{criterion_group, criterion_main, Criterion};
use pd_delaunay::testing::ArrayMesh;
use pd_delaunay::Optimizer;

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    let optimizer = Optimizer::new();

    group.bench_function("already_optimal", |b| {
        b.iter(|| {
            let mut mesh = ArrayMesh::kite_already_optimal();
            optimizer.optimize_default(&mut mesh).unwrap()
        })
    });

    group.bench_function("needs_one_flip", |b| {
        b.iter(|| {
            let mut mesh = ArrayMesh::kite_needs_one_flip();
            optimizer.optimize_default(&mut mesh).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_optimize);
criterion_main!(benches);
