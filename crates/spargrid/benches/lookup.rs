//! Benchmarks for label lookup and enumeration over grids of varying size.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spargrid::{LabeledGrid, shape::Shape};

/// Benchmark configurations: (name, per-axis extents, distinct label count).
fn bench_configs() -> Vec<(&'static str, Vec<usize>, i64)> {
    vec![
        ("2d-16", vec![16, 16], 4),
        ("2d-64", vec![64, 64], 4),
        ("3d-16", vec![16, 16, 16], 8),
        ("2d-64-many-labels", vec![64, 64], 256),
    ]
}

/// Build a grid whose labels cycle through `0..labels` in row-major order.
fn striped_grid(dims: &[usize], labels: i64) -> LabeledGrid {
    let shape = Shape::new(dims.to_vec()).expect("valid shape");
    let cells = (0..shape.size()).map(|i| i as i64 % labels).collect();
    LabeledGrid::from_flat(shape, cells).expect("matching cell count")
}

/// Benchmark a single-label subset lookup.
fn bench_subset(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset");

    for (name, dims, labels) in bench_configs() {
        let grid = striped_grid(&dims, labels);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| grid.subset(black_box(labels / 2)))
        });
    }

    group.finish();
}

/// Benchmark the distinct-label scan behind `labels()` and `len()`.
fn bench_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("labels");

    for (name, dims, labels) in bench_configs() {
        let grid = striped_grid(&dims, labels);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| black_box(&grid).labels().count())
        });
    }

    group.finish();
}

/// Benchmark a full subsets() pass, one rescan per distinct label.
fn bench_subsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("subsets");

    for (name, dims, labels) in bench_configs() {
        let grid = striped_grid(&dims, labels);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                black_box(&grid)
                    .subsets()
                    .map(|subset| subset.len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_subset, bench_labels, bench_subsets);
}

pub use bench_defs::benches;
criterion_main!(benches);
