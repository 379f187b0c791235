use crate::{
    constants::MAX_WEIGHT,
    edge_direction::EdgeDirection,
    types::{EdgeId, NodeId},
    weighting::{Milliseconds, Weight},
};

/// Edge of the base graph, weighted once during preparation
#[derive(Debug, Clone)]
pub struct CHBaseEdge {
    /// Id of the edge in the base graph
    pub id: EdgeId,
    pub start: NodeId,
    pub end: NodeId,

    pub distance: f64,
    pub forward_time: Milliseconds,
    pub backward_time: Milliseconds,
    pub forward_weight: Weight,
    pub backward_weight: Weight,
}

/// Directed shortcut from `start` to `end` bypassing a contracted node
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub start: NodeId,
    pub end: NodeId,

    /// Skipped CH edge incoming to the contracted node
    pub incoming_edge: EdgeId,

    /// Skipped CH edge outgoing from the contracted node
    pub outgoing_edge: EdgeId,

    pub weight: Weight,
}

#[derive(Debug, Clone)]
pub enum CHGraphEdge {
    Shortcut(Shortcut),
    Edge(CHBaseEdge),
}

impl CHGraphEdge {
    pub fn start_node(&self) -> NodeId {
        match self {
            CHGraphEdge::Shortcut(shortcut) => shortcut.start,
            CHGraphEdge::Edge(edge) => edge.start,
        }
    }

    pub fn end_node(&self) -> NodeId {
        match self {
            CHGraphEdge::Shortcut(shortcut) => shortcut.end,
            CHGraphEdge::Edge(edge) => edge.end,
        }
    }

    pub fn adj_node(&self, node: NodeId) -> NodeId {
        if self.start_node() == node {
            self.end_node()
        } else {
            self.start_node()
        }
    }

    /// Weight when traversing the edge starting at `node`
    pub fn weight_from(&self, node: NodeId) -> Weight {
        match self {
            CHGraphEdge::Shortcut(shortcut) if shortcut.start == node => shortcut.weight,
            CHGraphEdge::Shortcut(_) => MAX_WEIGHT,
            CHGraphEdge::Edge(edge) => match edge.direction_from(node) {
                EdgeDirection::Forward => edge.forward_weight,
                EdgeDirection::Backward => edge.backward_weight,
            },
        }
    }
}

impl CHBaseEdge {
    pub fn direction_from(&self, node: NodeId) -> EdgeDirection {
        if self.start == node {
            EdgeDirection::Forward
        } else {
            EdgeDirection::Backward
        }
    }

    pub fn time(&self, direction: EdgeDirection) -> Milliseconds {
        match direction {
            EdgeDirection::Forward => self.forward_time,
            EdgeDirection::Backward => self.backward_time,
        }
    }
}
