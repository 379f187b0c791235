use tracing::warn;

use crate::{
    edge_restrictions::EdgeRestrictions,
    error::{PathCalculatorError, Result},
    routing::{routing_algorithm::RoutingAlgorithm, routing_path::RoutingPath},
    types::NodeId,
};

/// Validates a request against a search strategy, runs the search and audits its result.
///
/// On success the returned list is never empty.
pub trait PathCalculator {
    fn calc_paths(
        &self,
        source: NodeId,
        target: NodeId,
        restrictions: &EdgeRestrictions,
    ) -> Result<Vec<RoutingPath>>;
}

/// Runs the edge to edge search when direction restrictions are present, the node to node
/// search otherwise. Nothing is searched when the algorithm lacks the required capability.
pub(crate) fn dispatch_search(
    algorithm: &mut dyn RoutingAlgorithm,
    source: NodeId,
    target: NodeId,
    restrictions: &EdgeRestrictions,
) -> Result<Vec<RoutingPath>> {
    if !restrictions.has_direction_restrictions() {
        return algorithm.calc_paths(source, target);
    }

    let Some(edge_to_edge) = algorithm.as_edge_to_edge() else {
        return Err(PathCalculatorError::IncompatibleAlgorithm {
            algorithm: algorithm.name().to_string(),
        });
    };

    edge_to_edge.calc_paths_edge_to_edge(
        source,
        target,
        restrictions.source_out_edge(),
        restrictions.target_in_edge(),
    )
}

pub(crate) fn check_visited_nodes(
    algorithm: &dyn RoutingAlgorithm,
    max_visited_nodes: usize,
) -> Result<()> {
    let visited_nodes = algorithm.visited_nodes();

    if visited_nodes > max_visited_nodes {
        warn!(
            "{} visited {visited_nodes} nodes, over the budget of {max_visited_nodes}",
            algorithm.name()
        );
        return Err(PathCalculatorError::MaximumNodesExceeded {
            max_visited_nodes,
            visited_nodes,
        });
    }

    Ok(())
}

pub(crate) fn check_not_empty(
    paths: &[RoutingPath],
    source: NodeId,
    target: NodeId,
) -> Result<()> {
    if paths.is_empty() {
        return Err(PathCalculatorError::InvariantViolation {
            source_node: source,
            target_node: target,
        });
    }

    Ok(())
}
