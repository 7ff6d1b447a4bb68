//! Criterion benchmarks for the OCISP solver.
//!
//! Uses complements of random clique relations with a planted clique, so
//! the working graphs are dense like the DIMACS benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ocisp::ga::operators::{crossover, random_independent_set};
use ocisp::ga::{OcispConfig, OcispRunner, RepairPolicy};
use ocisp::graph::{BipartiteGraph, Graph};
use ocisp::matching::maximum_matching;
use ocisp::random::create_rng;
use rand::Rng;

// ===========================================================================
// Instances
// ===========================================================================

fn planted_instance(n: usize, clique: usize, density: f64) -> Graph {
    let mut rng = create_rng(7);
    let mut declared = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if (u < clique && v < clique) || rng.random_bool(density) {
                declared.push((u, v));
            }
        }
    }
    Graph::complement(n, declared)
}

fn random_bipartite(size: usize, density: f64) -> BipartiteGraph {
    let mut rng = create_rng(11);
    let mut g = BipartiteGraph::new((0..size).collect(), (size..2 * size).collect());
    for i in 0..size {
        for j in 0..size {
            if rng.random_bool(density) {
                g.create_edge(i, j);
            }
        }
    }
    g
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("maximum_matching");

    for &size in &[20usize, 50, 100] {
        let g = random_bipartite(size, 0.1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| black_box(maximum_matching(black_box(g))))
        });
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossover");

    for &n in &[50usize, 100, 200] {
        let graph = planted_instance(n, n / 10, 0.5);
        let mut rng = create_rng(3);
        let p1 = random_independent_set(&graph, &mut rng);
        let p2 = random_independent_set(&graph, &mut rng);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(graph, p1, p2),
            |b, (g, p1, p2)| {
                let mut rng = create_rng(5);
                b.iter(|| black_box(crossover(g, p1, p2, RepairPolicy::AnyEdge, &mut rng)))
            },
        );
    }
    group.finish();
}

fn bench_generations(c: &mut Criterion) {
    let mut group = c.benchmark_group("ocisp_generations");
    group.sample_size(10);

    for (n, gen) in [(50usize, 100usize), (100, 50), (200, 20)] {
        let graph = planted_instance(n, n / 10, 0.5);
        let config = OcispConfig::default()
            .with_max_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_g{}", n, gen), n),
            &(graph, config),
            |b, (g, c)| {
                b.iter(|| {
                    let result = OcispRunner::run(black_box(g), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_matching, bench_crossover, bench_generations);
criterion_main!(benches);
