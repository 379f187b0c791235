use tracing::{debug, warn};

use crate::{
    algorithm_factory::RoutingAlgorithmFactory,
    algorithm_options::AlgorithmOptions,
    edge_restrictions::EdgeRestrictions,
    error::Result,
    graph::Graph,
    path_calculator::{PathCalculator, check_not_empty, check_visited_nodes, dispatch_search},
    routing::routing_path::RoutingPath,
    stopwatch::Stopwatch,
    types::NodeId,
    weighting::{UnfavoredEdgeWeighting, Weighting},
};

/// Path calculator weighting the graph at query time.
///
/// Whether direction restrictions can be honored depends on the algorithm the factory
/// produces, so that check runs once the algorithm exists, before it searches.
/// Unfavored edges are penalized through a weighting built for the request only.
pub struct FlexiblePathCalculator<'a, G, F>
where
    G: Graph,
    F: RoutingAlgorithmFactory<G>,
{
    graph: &'a G,
    factory: F,
    weighting: &'a dyn Weighting<G>,
    options: AlgorithmOptions,
}

impl<'a, G, F> FlexiblePathCalculator<'a, G, F>
where
    G: Graph,
    F: RoutingAlgorithmFactory<G>,
{
    pub fn new(
        graph: &'a G,
        factory: F,
        weighting: &'a dyn Weighting<G>,
        options: AlgorithmOptions,
    ) -> Self {
        FlexiblePathCalculator {
            graph,
            factory,
            weighting,
            options,
        }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn options(&self) -> &AlgorithmOptions {
        &self.options
    }
}

impl<G, F> PathCalculator for FlexiblePathCalculator<'_, G, F>
where
    G: Graph,
    F: RoutingAlgorithmFactory<G>,
{
    fn calc_paths(
        &self,
        source: NodeId,
        target: NodeId,
        restrictions: &EdgeRestrictions,
    ) -> Result<Vec<RoutingPath>> {
        let stopwatch = Stopwatch::new("flexible_path_calculator/calc_paths");

        let penalized;
        let weighting: &dyn Weighting<G> = if restrictions.unfavored_edges().is_empty() {
            self.weighting
        } else {
            penalized = UnfavoredEdgeWeighting::new(self.weighting, restrictions.unfavored_edges());
            &penalized
        };

        let mut algorithm = self
            .factory
            .create_algo(self.graph, weighting, &self.options);

        let paths = dispatch_search(algorithm.as_mut(), source, target, restrictions)?;

        // Over budget results are rejected even when a path was found
        check_visited_nodes(algorithm.as_ref(), self.options.max_visited_nodes)?;

        if let Err(error) = check_not_empty(&paths, source, target) {
            warn!("{} returned no path without an error", algorithm.name());
            return Err(error);
        }

        debug!(
            "{} found {} path(s), visited nodes: {}",
            algorithm.name(),
            paths.len(),
            algorithm.visited_nodes()
        );
        stopwatch.report();

        Ok(paths)
    }
}
