use fxhash::FxHashSet;

use crate::constants::{MAX_DURATION, MAX_WEIGHT, UNFAVORED_EDGE_PENALTY};
use crate::edge_direction::EdgeDirection;
use crate::graph::{Graph, GraphEdge};
use crate::types::EdgeId;

pub type Weight = u32;
pub type Milliseconds = u32;

/// Cost model applied to the edges of a graph.
///
/// A weight of `MAX_WEIGHT` marks the edge as not traversable in the given direction.
pub trait Weighting<G>
where
    G: Graph,
{
    fn name(&self) -> &str;

    fn can_access_edge(&self, edge: &G::Edge) -> bool {
        self.calc_edge_weight(edge, EdgeDirection::Forward) != MAX_WEIGHT
            || self.calc_edge_weight(edge, EdgeDirection::Backward) != MAX_WEIGHT
    }

    fn calc_edge_weight(&self, edge: &G::Edge, direction: EdgeDirection) -> Weight;
    fn calc_edge_ms(&self, edge: &G::Edge, direction: EdgeDirection) -> Milliseconds;
}

/// Weights edges by their length in meters, travel time assumes a constant speed
pub struct ShortestWeighting {
    speed_kmh: f64,
}

impl ShortestWeighting {
    pub fn new(speed_kmh: f64) -> Self {
        ShortestWeighting { speed_kmh }
    }
}

impl Default for ShortestWeighting {
    fn default() -> Self {
        ShortestWeighting::new(50.0)
    }
}

impl<G: Graph> Weighting<G> for ShortestWeighting {
    fn name(&self) -> &str {
        "shortest"
    }

    fn calc_edge_weight(&self, edge: &G::Edge, direction: EdgeDirection) -> Weight {
        if !edge.has_access(direction) {
            return MAX_WEIGHT;
        }

        edge.distance().round() as Weight
    }

    fn calc_edge_ms(&self, edge: &G::Edge, direction: EdgeDirection) -> Milliseconds {
        if !edge.has_access(direction) || self.speed_kmh <= 0.0 {
            return MAX_DURATION;
        }

        let speed_meters_per_second = self.speed_kmh / 3.6;
        ((edge.distance() / speed_meters_per_second) * 1000.0).round() as Milliseconds
    }
}

/// Penalizes, without forbidding, a set of edges on top of another weighting.
///
/// Built per request: the unfavored set never outlives the request that carried it.
pub struct UnfavoredEdgeWeighting<'a, G: Graph> {
    inner: &'a dyn Weighting<G>,
    unfavored_edges: &'a FxHashSet<EdgeId>,
    penalty: Weight,
}

impl<'a, G: Graph> UnfavoredEdgeWeighting<'a, G> {
    pub fn new(inner: &'a dyn Weighting<G>, unfavored_edges: &'a FxHashSet<EdgeId>) -> Self {
        Self::with_penalty(inner, unfavored_edges, UNFAVORED_EDGE_PENALTY)
    }

    pub fn with_penalty(
        inner: &'a dyn Weighting<G>,
        unfavored_edges: &'a FxHashSet<EdgeId>,
        penalty: Weight,
    ) -> Self {
        UnfavoredEdgeWeighting {
            inner,
            unfavored_edges,
            penalty,
        }
    }
}

impl<G: Graph> Weighting<G> for UnfavoredEdgeWeighting<'_, G> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn calc_edge_weight(&self, edge: &G::Edge, direction: EdgeDirection) -> Weight {
        let weight = self.inner.calc_edge_weight(edge, direction);

        if weight == MAX_WEIGHT || !self.unfavored_edges.contains(&edge.id()) {
            return weight;
        }

        // Saturate below MAX_WEIGHT so the edge stays traversable
        weight.saturating_add(self.penalty).min(MAX_WEIGHT - 1)
    }

    fn calc_edge_ms(&self, edge: &G::Edge, direction: EdgeDirection) -> Milliseconds {
        self.inner.calc_edge_ms(edge, direction)
    }
}

#[cfg(test)]
mod tests {
    use crate::base_graph::BaseGraph;

    use super::*;

    #[test]
    fn test_shortest_weighting() {
        let mut graph = BaseGraph::new();
        let edge_id = graph.add_oneway_edge(0, 1, 1000.0);
        let edge = graph.edge(edge_id);
        let weighting = ShortestWeighting::new(36.0);

        assert_eq!(
            Weighting::<BaseGraph>::calc_edge_weight(&weighting, edge, EdgeDirection::Forward),
            1000
        );
        assert_eq!(
            Weighting::<BaseGraph>::calc_edge_weight(&weighting, edge, EdgeDirection::Backward),
            MAX_WEIGHT
        );
        // 36 km/h is 10 m/s
        assert_eq!(
            Weighting::<BaseGraph>::calc_edge_ms(&weighting, edge, EdgeDirection::Forward),
            100_000
        );
        assert!(Weighting::<BaseGraph>::can_access_edge(&weighting, edge));
    }

    #[test]
    fn test_unfavored_edges_are_penalized_not_forbidden() {
        let mut graph = BaseGraph::new();
        let unfavored = graph.add_edge(0, 1, 10.0);
        let other = graph.add_edge(1, 2, 10.0);
        let oneway = graph.add_oneway_edge(2, 3, 10.0);

        let shortest = ShortestWeighting::default();
        let unfavored_edges: FxHashSet<EdgeId> = [unfavored, oneway].into_iter().collect();
        let weighting = UnfavoredEdgeWeighting::<BaseGraph>::with_penalty(
            &shortest,
            &unfavored_edges,
            500,
        );

        assert_eq!(
            weighting.calc_edge_weight(graph.edge(unfavored), EdgeDirection::Forward),
            510
        );
        assert_eq!(
            weighting.calc_edge_weight(graph.edge(other), EdgeDirection::Forward),
            10
        );
        assert_eq!(
            weighting.calc_edge_weight(graph.edge(oneway), EdgeDirection::Backward),
            MAX_WEIGHT
        );
        assert_eq!(weighting.name(), "shortest");
    }
}
