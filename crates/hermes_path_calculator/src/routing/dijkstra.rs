use std::collections::BinaryHeap;

use tracing::debug;

use crate::constants::{INVALID_EDGE, INVALID_NODE, MAX_WEIGHT};
use crate::error::{PathCalculatorError, Result};
use crate::graph::{Graph, GraphEdge};
use crate::stopwatch::Stopwatch;
use crate::types::NodeId;
use crate::weighting::Weighting;

use super::node_data::{HeapItem, NodeData};
use super::routing_algorithm::RoutingAlgorithm;
use super::routing_path::RoutingPath;
use super::routing_path_builder::build_routing_path;

/// Unidirectional Dijkstra, routes between nodes only
pub struct Dijkstra<'a, G: Graph> {
    graph: &'a G,
    weighting: &'a dyn Weighting<G>,
    max_visited_nodes: usize,

    heap: BinaryHeap<HeapItem>,
    data: NodeData,
    visited_nodes: usize,
}

impl<'a, G: Graph> Dijkstra<'a, G> {
    pub fn new(graph: &'a G, weighting: &'a dyn Weighting<G>) -> Self {
        Dijkstra {
            graph,
            weighting,
            max_visited_nodes: usize::MAX,
            heap: BinaryHeap::new(),
            data: NodeData::default(),
            visited_nodes: 0,
        }
    }

    pub fn with_max_visited_nodes(mut self, max_visited_nodes: usize) -> Self {
        self.max_visited_nodes = max_visited_nodes;
        self
    }

    fn build_path(&self, target: NodeId) -> RoutingPath {
        let mut edges = Vec::with_capacity(32);
        let mut current_node = target;

        while let Some(entry) = self.data.get(current_node) {
            if entry.parent == INVALID_NODE {
                break;
            }

            let direction = self.graph.edge_direction(entry.edge_id, entry.parent);
            edges.push((entry.edge_id, direction));
            current_node = entry.parent;
        }

        edges.reverse();
        build_routing_path(self.graph, self.weighting, edges, self.data.weight(target))
    }

    fn relax_edges(&mut self, node_id: NodeId, weight: u32) {
        let graph = self.graph;
        for edge_id in graph.node_edges_iter(node_id) {
            let edge = graph.edge(edge_id);
            let adj_node = edge.adj_node(node_id);

            if self.data.is_settled(adj_node) {
                continue;
            }

            let direction = graph.edge_direction(edge_id, node_id);
            let edge_weight = self.weighting.calc_edge_weight(edge, direction);
            if edge_weight == MAX_WEIGHT {
                continue;
            }

            let next_weight = weight.saturating_add(edge_weight);
            if next_weight < self.data.weight(adj_node) {
                self.data.update(adj_node, next_weight, node_id, edge_id);
                self.heap.push(HeapItem {
                    node_id: adj_node,
                    weight: next_weight,
                });
            }
        }
    }
}

impl<G: Graph> RoutingAlgorithm for Dijkstra<'_, G> {
    fn name(&self) -> &str {
        "dijkstra"
    }

    fn calc_paths(&mut self, source: NodeId, target: NodeId) -> Result<Vec<RoutingPath>> {
        let stopwatch = Stopwatch::new("dijkstra/calc_paths");

        self.heap.clear();
        self.data = NodeData::default();
        self.visited_nodes = 0;

        self.data.update(source, 0, INVALID_NODE, INVALID_EDGE);
        self.heap.push(HeapItem {
            node_id: source,
            weight: 0,
        });

        let mut found = false;

        while let Some(HeapItem { node_id, weight }) = self.heap.pop() {
            if self.data.is_settled(node_id) || weight > self.data.weight(node_id) {
                continue;
            }

            self.data.set_settled(node_id);
            self.visited_nodes += 1;

            if node_id == target {
                found = true;
                break;
            }

            if self.visited_nodes > self.max_visited_nodes {
                break;
            }

            self.relax_edges(node_id, weight);
        }

        debug!("Dijkstra nodes visited: {}", self.visited_nodes);
        stopwatch.report();

        if !found {
            if self.visited_nodes > self.max_visited_nodes {
                return Err(PathCalculatorError::MaximumNodesExceeded {
                    max_visited_nodes: self.max_visited_nodes,
                    visited_nodes: self.visited_nodes,
                });
            }

            return Err(PathCalculatorError::ConnectionNotFound {
                source_node: source,
                target_node: target,
            });
        }

        Ok(vec![self.build_path(target)])
    }

    fn visited_nodes(&self) -> usize {
        self.visited_nodes
    }
}
