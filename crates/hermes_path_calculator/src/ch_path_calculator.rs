use tracing::{debug, warn};

use crate::{
    algorithm_factory::CHRoutingAlgorithmFactory,
    algorithm_options::AlgorithmOptions,
    edge_restrictions::EdgeRestrictions,
    error::{PathCalculatorError, Result},
    path_calculator::{PathCalculator, check_not_empty, check_visited_nodes, dispatch_search},
    routing::routing_path::RoutingPath,
    stopwatch::Stopwatch,
    types::NodeId,
};

/// Path calculator backed by a contraction hierarchy.
///
/// Edge weights are fixed when the hierarchy is prepared, so requests carrying
/// unfavored edges are rejected before any search is built.
pub struct CHPathCalculator<F: CHRoutingAlgorithmFactory> {
    factory: F,
    options: AlgorithmOptions,
}

impl<F: CHRoutingAlgorithmFactory> CHPathCalculator<F> {
    pub fn new(factory: F, options: AlgorithmOptions) -> Self {
        CHPathCalculator { factory, options }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn options(&self) -> &AlgorithmOptions {
        &self.options
    }
}

impl<F: CHRoutingAlgorithmFactory> PathCalculator for CHPathCalculator<F> {
    fn calc_paths(
        &self,
        source: NodeId,
        target: NodeId,
        restrictions: &EdgeRestrictions,
    ) -> Result<Vec<RoutingPath>> {
        if !restrictions.unfavored_edges().is_empty() {
            return Err(PathCalculatorError::UnsupportedConstraint {
                constraint: "unfavored edges",
                mode: "CH",
            });
        }

        let stopwatch = Stopwatch::new("ch_path_calculator/calc_paths");
        let mut algorithm = self.factory.create_algo(&self.options);

        let paths = dispatch_search(algorithm.as_mut(), source, target, restrictions)?;

        if let Err(error) = check_not_empty(&paths, source, target) {
            warn!("{} returned no path without an error", algorithm.name());
            return Err(error);
        }

        check_visited_nodes(algorithm.as_ref(), self.options.max_visited_nodes)?;

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
