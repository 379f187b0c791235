use crate::{
    error::Result,
    types::{EdgeId, NodeId},
};

use super::routing_path::RoutingPath;

/// A single use search, created for one request and dropped afterwards.
///
/// Unreachable targets are reported as `ConnectionNotFound`. A successful
/// search always returns at least one path.
pub trait RoutingAlgorithm {
    /// Identifies the concrete algorithm in logs and errors
    fn name(&self) -> &str;

    fn calc_paths(&mut self, source: NodeId, target: NodeId) -> Result<Vec<RoutingPath>>;

    /// Number of nodes settled by the last search
    fn visited_nodes(&self) -> usize;

    /// Edge to edge capability, `None` when the algorithm can only route between nodes
    fn as_edge_to_edge(&mut self) -> Option<&mut dyn EdgeToEdgeRoutingAlgorithm> {
        None
    }
}

pub trait EdgeToEdgeRoutingAlgorithm: RoutingAlgorithm {
    /// Routes from `source` to `target`, leaving the source through `source_out_edge`
    /// and reaching the target through `target_in_edge`. `None` accepts any edge.
    fn calc_paths_edge_to_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        source_out_edge: Option<EdgeId>,
        target_in_edge: Option<EdgeId>,
    ) -> Result<Vec<RoutingPath>>;
}
