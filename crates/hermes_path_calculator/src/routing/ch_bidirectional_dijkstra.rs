use std::collections::BinaryHeap;

use tracing::debug;

use crate::ch::ch_graph::CHGraph;
use crate::constants::{INVALID_EDGE, INVALID_NODE, MAX_WEIGHT};
use crate::edge_direction::EdgeDirection;
use crate::error::{PathCalculatorError, Result};
use crate::stopwatch::Stopwatch;
use crate::types::{EdgeId, NodeId};
use crate::weighting::{Milliseconds, Weight};

use super::node_data::{HeapItem, NodeData};
use super::routing_algorithm::RoutingAlgorithm;
use super::routing_path::RoutingPath;
use super::search_direction::SearchDirection;

/// Bidirectional upward search over a contraction hierarchy.
///
/// Weights are baked into the hierarchy, so no per request penalty can be applied.
pub struct CHBidirectionalDijkstra<'a> {
    graph: &'a CHGraph,
    max_visited_nodes: usize,

    forward_heap: BinaryHeap<HeapItem>,
    forward_data: NodeData,

    backward_heap: BinaryHeap<HeapItem>,
    backward_data: NodeData,

    best_meeting_node: NodeId,
    best_path_weight: Weight,

    visited_nodes: usize,
}

impl<'a> CHBidirectionalDijkstra<'a> {
    pub fn new(graph: &'a CHGraph) -> Self {
        CHBidirectionalDijkstra {
            graph,
            max_visited_nodes: usize::MAX,
            forward_heap: BinaryHeap::new(),
            forward_data: NodeData::default(),
            backward_heap: BinaryHeap::new(),
            backward_data: NodeData::default(),
            best_meeting_node: INVALID_NODE,
            best_path_weight: MAX_WEIGHT,
            visited_nodes: 0,
        }
    }

    pub fn with_max_visited_nodes(mut self, max_visited_nodes: usize) -> Self {
        self.max_visited_nodes = max_visited_nodes;
        self
    }

    fn reset(&mut self) {
        self.forward_heap.clear();
        self.forward_data = NodeData::default();
        self.backward_heap.clear();
        self.backward_data = NodeData::default();
        self.best_meeting_node = INVALID_NODE;
        self.best_path_weight = MAX_WEIGHT;
        self.visited_nodes = 0;
    }

    fn init_node(&mut self, dir: SearchDirection, node: NodeId) {
        let (data, heap) = match dir {
            SearchDirection::Forward => (&mut self.forward_data, &mut self.forward_heap),
            SearchDirection::Backward => (&mut self.backward_data, &mut self.backward_heap),
        };

        data.update(node, 0, INVALID_NODE, INVALID_EDGE);
        heap.push(HeapItem {
            node_id: node,
            weight: 0,
        });
    }

    fn update_best_path(&mut self, node: NodeId) {
        let forward_weight = self.forward_data.weight(node);
        let backward_weight = self.backward_data.weight(node);

        if forward_weight == MAX_WEIGHT || backward_weight == MAX_WEIGHT {
            return;
        }

        let total_weight = forward_weight.saturating_add(backward_weight);
        if total_weight < self.best_path_weight {
            self.best_path_weight = total_weight;
            self.best_meeting_node = node;
        }
    }

    /// A direction is done once its smallest key can no longer improve the best path
    fn can_continue(&self, dir: SearchDirection) -> bool {
        let heap = match dir {
            SearchDirection::Forward => &self.forward_heap,
            SearchDirection::Backward => &self.backward_heap,
        };

        heap.peek()
            .is_some_and(|item| item.weight < self.best_path_weight)
    }

    fn process_node(&mut self, dir: SearchDirection, node_id: NodeId, weight: Weight) {
        let graph = self.graph;
        let node_rank = graph.node_rank(node_id);

        let edges = match dir {
            SearchDirection::Forward => graph.outgoing_edges(node_id),
            SearchDirection::Backward => graph.incoming_edges(node_id),
        };

        for &edge_id in edges {
            let edge = graph.edge(edge_id);
            let adj_node = edge.adj_node(node_id);

            // Only climb the hierarchy
            if graph.node_rank(adj_node) <= node_rank {
                continue;
            }

            let edge_weight = match dir {
                SearchDirection::Forward => edge.weight_from(node_id),
                SearchDirection::Backward => edge.weight_from(adj_node),
            };
            if edge_weight == MAX_WEIGHT {
                continue;
            }

            let data = match dir {
                SearchDirection::Forward => &mut self.forward_data,
                SearchDirection::Backward => &mut self.backward_data,
            };

            if data.is_settled(adj_node) {
                continue;
            }

            let next_weight = weight.saturating_add(edge_weight);
            if next_weight < data.weight(adj_node) {
                data.update(adj_node, next_weight, node_id, edge_id);
                match dir {
                    SearchDirection::Forward => &mut self.forward_heap,
                    SearchDirection::Backward => &mut self.backward_heap,
                }
                .push(HeapItem {
                    node_id: adj_node,
                    weight: next_weight,
                });
                self.update_best_path(adj_node);
            }
        }

        match dir {
            SearchDirection::Forward => self.forward_data.set_settled(node_id),
            SearchDirection::Backward => self.backward_data.set_settled(node_id),
        }
    }

    fn run(&mut self) {
        let mut active_direction = SearchDirection::Backward;

        loop {
            let Some(direction) = active_direction.next(
                self.can_continue(SearchDirection::Forward),
                self.can_continue(SearchDirection::Backward),
            ) else {
                break;
            };
            active_direction = direction;

            let (heap, data) = match active_direction {
                SearchDirection::Forward => (&mut self.forward_heap, &self.forward_data),
                SearchDirection::Backward => (&mut self.backward_heap, &self.backward_data),
            };

            let Some(HeapItem { node_id, weight }) = heap.pop() else {
                continue;
            };

            if data.is_settled(node_id) || weight > data.weight(node_id) {
                continue;
            }

            self.process_node(active_direction, node_id, weight);
            self.visited_nodes += 1;

            if self.visited_nodes > self.max_visited_nodes {
                break;
            }
        }
    }

    /// CH edges from the source to `node`, each with the node it is entered from
    fn forward_ch_edges(&self, node: NodeId) -> Vec<(EdgeId, NodeId)> {
        let mut edges = Vec::with_capacity(16);
        let mut current_node = node;

        while let Some(entry) = self.forward_data.get(current_node) {
            if entry.parent == INVALID_NODE {
                break;
            }

            edges.push((entry.edge_id, entry.parent));
            current_node = entry.parent;
        }

        edges.reverse();
        edges
    }

    fn backward_ch_edges(&self, node: NodeId) -> Vec<(EdgeId, NodeId)> {
        let mut edges = Vec::with_capacity(16);
        let mut current_node = node;

        while let Some(entry) = self.backward_data.get(current_node) {
            if entry.parent == INVALID_NODE {
                break;
            }

            edges.push((entry.edge_id, current_node));
            current_node = entry.parent;
        }

        edges
    }

    fn build_path(&self) -> RoutingPath {
        let meeting_node = self.best_meeting_node;
        let mut ch_edges = self.forward_ch_edges(meeting_node);
        ch_edges.extend(self.backward_ch_edges(meeting_node));

        let mut unfolded = Vec::with_capacity(ch_edges.len() * 2);
        for (edge_id, from) in ch_edges {
            self.graph.unfold_edge(edge_id, from, &mut unfolded);
        }

        let mut edges: Vec<(EdgeId, EdgeDirection)> = Vec::with_capacity(unfolded.len());
        let mut distance = 0.0;
        let mut time: Milliseconds = 0;

        for (edge_id, from) in unfolded {
            if let Some(edge) = self.graph.base_edge(edge_id) {
                let direction = edge.direction_from(from);
                edges.push((edge.id, direction));
                distance += edge.distance;
                time = time.saturating_add(edge.time(direction));
            }
        }

        RoutingPath::new(edges, self.best_path_weight, distance, time)
    }
}

impl RoutingAlgorithm for CHBidirectionalDijkstra<'_> {
    fn name(&self) -> &str {
        "ch_bidirectional_dijkstra"
    }

    fn calc_paths(&mut self, source: NodeId, target: NodeId) -> Result<Vec<RoutingPath>> {
        let stopwatch = Stopwatch::new("ch_bidirectional_dijkstra/calc_paths");

        self.reset();

        let not_found = PathCalculatorError::ConnectionNotFound {
            source_node: source,
            target_node: target,
        };

        if source >= self.graph.node_count() || target >= self.graph.node_count() {
            return Err(not_found);
        }

        self.init_node(SearchDirection::Forward, source);
        self.init_node(SearchDirection::Backward, target);
        self.update_best_path(source);

        self.run();

        debug!(
            "CHBidirectionalDijkstra nodes visited: {}",
            self.visited_nodes
        );
        stopwatch.report();

        if self.best_meeting_node == INVALID_NODE {
            if self.visited_nodes > self.max_visited_nodes {
                return Err(PathCalculatorError::MaximumNodesExceeded {
                    max_visited_nodes: self.max_visited_nodes,
                    visited_nodes: self.visited_nodes,
                });
            }

            return Err(not_found);
        }

        Ok(vec![self.build_path()])
    }

    fn visited_nodes(&self) -> usize {
        self.visited_nodes
    }
}
