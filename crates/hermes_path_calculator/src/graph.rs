use crate::{
    edge_direction::EdgeDirection,
    types::{EdgeId, NodeId},
};

pub trait GraphEdge {
    fn id(&self) -> EdgeId;
    fn start_node(&self) -> NodeId;
    fn end_node(&self) -> NodeId;
    fn adj_node(&self, node: NodeId) -> NodeId {
        if self.start_node() == node {
            self.end_node()
        } else {
            self.start_node()
        }
    }

    /// Length of the edge in meters
    fn distance(&self) -> f64;

    fn has_access(&self, direction: EdgeDirection) -> bool;
}

/// Read-only view over a road network.
///
/// Implementations must be safe for concurrent reads: a single graph is shared
/// by every request routed through a calculator.
pub trait Graph {
    type Edge: GraphEdge;

    type EdgeIterator<'a>: Iterator<Item = EdgeId>
    where
        Self: 'a;

    fn edge_count(&self) -> usize;
    fn node_count(&self) -> usize;

    /// All edges touching `node`, regardless of their orientation
    fn node_edges_iter(&self, node: NodeId) -> Self::EdgeIterator<'_>;

    fn edge(&self, edge: EdgeId) -> &Self::Edge;

    /// Direction of `edge_id` when it is traversed starting at `start`
    fn edge_direction(&self, edge_id: EdgeId, start: NodeId) -> EdgeDirection;
}
