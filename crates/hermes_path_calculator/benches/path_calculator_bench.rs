use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use hermes_path_calculator::{
    algorithm_factory::DefaultRoutingAlgorithmFactory,
    algorithm_options::{AlgorithmKind, AlgorithmOptions},
    base_graph::BaseGraph,
    edge_restrictions::EdgeRestrictions,
    flexible_path_calculator::FlexiblePathCalculator,
    path_calculator::PathCalculator,
    weighting::ShortestWeighting,
};

const GRID_SIZE: usize = 100;

/// Square grid with 100m edges between neighbours
fn create_grid_graph(size: usize) -> BaseGraph {
    let mut graph = BaseGraph::with_capacity(size * size, 2 * size * size);

    for row in 0..size {
        for col in 0..size {
            let node = row * size + col;
            if col + 1 < size {
                graph.add_edge(node, node + 1, 100.0);
            }
            if row + 1 < size {
                graph.add_edge(node, node + size, 100.0);
            }
        }
    }

    graph
}

fn flexible_benchmark(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();

    let graph = create_grid_graph(GRID_SIZE);
    let weighting = ShortestWeighting::default();
    let source = 0;
    let target = GRID_SIZE * GRID_SIZE - 1;

    for algorithm in [AlgorithmKind::Dijkstra, AlgorithmKind::BidirectionalDijkstra] {
        let calculator = FlexiblePathCalculator::new(
            &graph,
            DefaultRoutingAlgorithmFactory::new(),
            &weighting,
            AlgorithmOptions::default().with_algorithm(algorithm),
        );
        let restrictions = EdgeRestrictions::new();

        c.bench_function(&format!("flexible {algorithm:?} grid"), |b| {
            b.iter(|| {
                calculator
                    .calc_paths(black_box(source), black_box(target), &restrictions)
                    .map(|paths| paths.len())
            })
        });
    }

    let calculator = FlexiblePathCalculator::new(
        &graph,
        DefaultRoutingAlgorithmFactory::new(),
        &weighting,
        AlgorithmOptions::default(),
    );
    let mut restrictions = EdgeRestrictions::new();
    restrictions
        .unfavored_edges_mut()
        .extend((0..GRID_SIZE).map(|edge| edge * 2));

    c.bench_function("flexible unfavored edges grid", |b| {
        b.iter(|| {
            calculator
                .calc_paths(black_box(source), black_box(target), &restrictions)
                .map(|paths| paths.len())
        })
    });
}

criterion_group!(benches, flexible_benchmark);
criterion_main!(benches);
