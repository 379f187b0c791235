use crate::{
    edge_direction::EdgeDirection,
    types::EdgeId,
    weighting::{Milliseconds, Weight},
};

/// One route found by a search algorithm.
///
/// Path calculators never look inside, they only count the paths they receive.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingPath {
    edges: Vec<(EdgeId, EdgeDirection)>,
    weight: Weight,
    distance: f64,
    time: Milliseconds,
}

impl RoutingPath {
    pub fn new(
        edges: Vec<(EdgeId, EdgeDirection)>,
        weight: Weight,
        distance: f64,
        time: Milliseconds,
    ) -> RoutingPath {
        RoutingPath {
            edges,
            weight,
            distance,
            time,
        }
    }

    pub fn edges(&self) -> &[(EdgeId, EdgeDirection)] {
        &self.edges
    }

    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.iter().map(|(edge_id, _)| *edge_id).collect()
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Length in meters
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn time(&self) -> Milliseconds {
        self.time
    }
}
