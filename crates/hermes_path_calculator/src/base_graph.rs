use std::cmp::max;

use crate::{
    edge_direction::EdgeDirection,
    graph::{Graph, GraphEdge},
    types::{EdgeId, NodeId},
};

#[derive(Debug, Clone)]
pub struct BaseGraphEdge {
    id: EdgeId,
    start_node: NodeId,
    end_node: NodeId,
    distance: f64,
    forward_access: bool,
    backward_access: bool,
}

impl GraphEdge for BaseGraphEdge {
    fn id(&self) -> EdgeId {
        self.id
    }

    fn start_node(&self) -> NodeId {
        self.start_node
    }

    fn end_node(&self) -> NodeId {
        self.end_node
    }

    fn distance(&self) -> f64 {
        self.distance
    }

    fn has_access(&self, direction: EdgeDirection) -> bool {
        match direction {
            EdgeDirection::Forward => self.forward_access,
            EdgeDirection::Backward => self.backward_access,
        }
    }
}

/// In-memory road network stored as an adjacency list
#[derive(Debug, Default, Clone)]
pub struct BaseGraph {
    nodes: usize,
    edges: Vec<BaseGraphEdge>,
    adjacency_list: Vec<Vec<EdgeId>>,
}

impl BaseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        BaseGraph {
            nodes,
            edges: Vec::with_capacity(edges),
            adjacency_list: vec![vec![]; nodes],
        }
    }

    fn add_node(&mut self, node_id: NodeId) {
        self.nodes = max(self.nodes, node_id + 1);

        if self.nodes > self.adjacency_list.len() {
            self.adjacency_list.resize(self.nodes, vec![]);
        }
    }

    /// Adds an edge usable in both directions and returns its id
    pub fn add_edge(&mut self, start_node: NodeId, end_node: NodeId, distance: f64) -> EdgeId {
        self.add_directed_edge(start_node, end_node, distance, true, true)
    }

    pub fn add_oneway_edge(&mut self, start_node: NodeId, end_node: NodeId, distance: f64) -> EdgeId {
        self.add_directed_edge(start_node, end_node, distance, true, false)
    }

    pub fn add_directed_edge(
        &mut self,
        start_node: NodeId,
        end_node: NodeId,
        distance: f64,
        forward_access: bool,
        backward_access: bool,
    ) -> EdgeId {
        self.add_node(start_node);
        self.add_node(end_node);

        let edge_id = self.edges.len();
        self.edges.push(BaseGraphEdge {
            id: edge_id,
            start_node,
            end_node,
            distance,
            forward_access,
            backward_access,
        });

        self.adjacency_list[start_node].push(edge_id);
        if start_node != end_node {
            self.adjacency_list[end_node].push(edge_id);
        }

        edge_id
    }
}

impl Graph for BaseGraph {
    type Edge = BaseGraphEdge;
    type EdgeIterator<'a> = std::iter::Copied<std::slice::Iter<'a, EdgeId>>;

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn node_count(&self) -> usize {
        self.nodes
    }

    fn node_edges_iter(&self, node: NodeId) -> Self::EdgeIterator<'_> {
        self.adjacency_list
            .get(node)
            .map(|edges| edges.as_slice())
            .unwrap_or_default()
            .iter()
            .copied()
    }

    fn edge(&self, edge: EdgeId) -> &BaseGraphEdge {
        &self.edges[edge]
    }

    fn edge_direction(&self, edge_id: EdgeId, start: NodeId) -> EdgeDirection {
        if self.edges[edge_id].start_node == start {
            EdgeDirection::Forward
        } else {
            EdgeDirection::Backward
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_registers_both_endpoints() {
        let mut graph = BaseGraph::new();
        let edge_id = graph.add_edge(0, 3, 10.0);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_edges_iter(0).collect::<Vec<_>>(), vec![edge_id]);
        assert_eq!(graph.node_edges_iter(3).collect::<Vec<_>>(), vec![edge_id]);
        assert_eq!(graph.node_edges_iter(1).count(), 0);
    }

    #[test]
    fn test_edge_direction() {
        let mut graph = BaseGraph::new();
        let edge_id = graph.add_oneway_edge(1, 2, 5.0);

        assert_eq!(graph.edge_direction(edge_id, 1), EdgeDirection::Forward);
        assert_eq!(graph.edge_direction(edge_id, 2), EdgeDirection::Backward);
        assert!(graph.edge(edge_id).has_access(EdgeDirection::Forward));
        assert!(!graph.edge(edge_id).has_access(EdgeDirection::Backward));
        assert_eq!(graph.edge(edge_id).adj_node(1), 2);
    }
}
