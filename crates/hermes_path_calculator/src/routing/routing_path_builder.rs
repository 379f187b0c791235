use crate::{
    edge_direction::EdgeDirection,
    graph::{Graph, GraphEdge},
    types::EdgeId,
    weighting::{Weight, Weighting},
};

use super::routing_path::RoutingPath;

pub(crate) fn build_routing_path<G>(
    graph: &G,
    weighting: &dyn Weighting<G>,
    edges: Vec<(EdgeId, EdgeDirection)>,
    weight: Weight,
) -> RoutingPath
where
    G: Graph,
{
    let mut distance = 0.0;
    let mut time: u32 = 0;

    for &(edge_id, direction) in &edges {
        let edge = graph.edge(edge_id);
        distance += edge.distance();
        time = time.saturating_add(weighting.calc_edge_ms(edge, direction));
    }

    RoutingPath::new(edges, weight, distance, time)
}
