use tracing::debug;

use crate::{
    algorithm_options::{AlgorithmKind, AlgorithmOptions},
    ch::ch_graph::CHGraph,
    graph::Graph,
    routing::{
        bidirectional_dijkstra::BidirectionalDijkstra,
        ch_bidirectional_dijkstra::CHBidirectionalDijkstra, dijkstra::Dijkstra,
        routing_algorithm::RoutingAlgorithm,
    },
    weighting::Weighting,
};

/// Builds one search per request over a live weighted graph
pub trait RoutingAlgorithmFactory<G: Graph> {
    fn create_algo<'a>(
        &'a self,
        graph: &'a G,
        weighting: &'a dyn Weighting<G>,
        options: &AlgorithmOptions,
    ) -> Box<dyn RoutingAlgorithm + 'a>;
}

/// Builds one search per request over a prepared hierarchy
pub trait CHRoutingAlgorithmFactory {
    fn create_algo(&self, options: &AlgorithmOptions) -> Box<dyn RoutingAlgorithm + '_>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRoutingAlgorithmFactory;

impl DefaultRoutingAlgorithmFactory {
    pub fn new() -> Self {
        DefaultRoutingAlgorithmFactory
    }
}

impl<G: Graph> RoutingAlgorithmFactory<G> for DefaultRoutingAlgorithmFactory {
    fn create_algo<'a>(
        &'a self,
        graph: &'a G,
        weighting: &'a dyn Weighting<G>,
        options: &AlgorithmOptions,
    ) -> Box<dyn RoutingAlgorithm + 'a> {
        debug!(
            "Creating {:?} with weighting {}",
            options.algorithm,
            weighting.name()
        );

        match options.algorithm {
            AlgorithmKind::Dijkstra => Box::new(
                Dijkstra::new(graph, weighting).with_max_visited_nodes(options.max_visited_nodes),
            ),
            AlgorithmKind::BidirectionalDijkstra => Box::new(
                BidirectionalDijkstra::new(graph, weighting)
                    .with_max_visited_nodes(options.max_visited_nodes),
            ),
        }
    }
}

pub struct DefaultCHRoutingAlgorithmFactory<'a> {
    graph: &'a CHGraph,
}

impl<'a> DefaultCHRoutingAlgorithmFactory<'a> {
    pub fn new(graph: &'a CHGraph) -> Self {
        DefaultCHRoutingAlgorithmFactory { graph }
    }
}

impl CHRoutingAlgorithmFactory for DefaultCHRoutingAlgorithmFactory<'_> {
    // The hierarchy has a single query algorithm, `options.algorithm` does not apply
    fn create_algo(&self, options: &AlgorithmOptions) -> Box<dyn RoutingAlgorithm + '_> {
        Box::new(
            CHBidirectionalDijkstra::new(self.graph)
                .with_max_visited_nodes(options.max_visited_nodes),
        )
    }
}
