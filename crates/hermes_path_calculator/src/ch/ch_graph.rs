use crate::{
    constants::MAX_WEIGHT,
    types::{EdgeId, NodeId},
};

use super::ch_edge::{CHBaseEdge, CHGraphEdge, Shortcut};

/// Contracted graph: base edges, shortcuts and node ranks.
///
/// Building the hierarchy (node ordering, witness searches) happens elsewhere,
/// this only stores the result for queries.
#[derive(Debug, Default, Clone)]
pub struct CHGraph {
    nodes: usize,
    edges: Vec<CHGraphEdge>,
    ranks: Vec<usize>,

    /// For each node, a list the incoming edges into this node
    incoming_edges: Vec<Vec<EdgeId>>,

    /// For each node, a list the outgoing edges from this node
    outgoing_edges: Vec<Vec<EdgeId>>,
}

impl CHGraph {
    pub fn new(nodes: usize) -> Self {
        CHGraph {
            nodes,
            edges: Vec::new(),
            ranks: vec![0; nodes],
            incoming_edges: vec![Vec::new(); nodes],
            outgoing_edges: vec![Vec::new(); nodes],
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_rank(&self, node: NodeId) -> usize {
        self.ranks[node]
    }

    pub fn set_node_rank(&mut self, node: NodeId, rank: usize) {
        self.ranks[node] = rank;
    }

    /// Adds a base edge and returns its CH edge id
    pub fn add_edge(&mut self, edge: CHBaseEdge) -> EdgeId {
        let edge_id = self.edges.len();

        if edge.forward_weight != MAX_WEIGHT {
            self.outgoing_edges[edge.start].push(edge_id);
            self.incoming_edges[edge.end].push(edge_id);
        }

        if edge.backward_weight != MAX_WEIGHT {
            self.incoming_edges[edge.start].push(edge_id);
            self.outgoing_edges[edge.end].push(edge_id);
        }

        self.edges.push(CHGraphEdge::Edge(edge));
        edge_id
    }

    /// Adds a shortcut and returns its CH edge id
    pub fn add_shortcut(&mut self, shortcut: Shortcut) -> EdgeId {
        let edge_id = self.edges.len();
        self.outgoing_edges[shortcut.start].push(edge_id);
        self.incoming_edges[shortcut.end].push(edge_id);

        self.edges.push(CHGraphEdge::Shortcut(shortcut));
        edge_id
    }

    pub fn edge(&self, edge_id: EdgeId) -> &CHGraphEdge {
        &self.edges[edge_id]
    }

    pub fn incoming_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.incoming_edges[node]
    }

    pub fn outgoing_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.outgoing_edges[node]
    }

    /// Expands `edge_id`, traversed starting at `from`, into the base edges it stands for.
    ///
    /// Every unfolded entry is a CH base edge id along with the node it is entered from.
    pub fn unfold_edge(&self, edge_id: EdgeId, from: NodeId, edges: &mut Vec<(EdgeId, NodeId)>) {
        match self.edge(edge_id) {
            CHGraphEdge::Shortcut(shortcut) => {
                let middle = self.edge(shortcut.incoming_edge).adj_node(from);
                self.unfold_edge(shortcut.incoming_edge, from, edges);
                self.unfold_edge(shortcut.outgoing_edge, middle, edges);
            }
            CHGraphEdge::Edge(_) => edges.push((edge_id, from)),
        }
    }

    pub fn base_edge(&self, edge_id: EdgeId) -> Option<&CHBaseEdge> {
        match self.edge(edge_id) {
            CHGraphEdge::Edge(edge) => Some(edge),
            CHGraphEdge::Shortcut(_) => None,
        }
    }
}
