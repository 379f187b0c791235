use std::collections::BinaryHeap;

use tracing::debug;

use crate::constants::{INVALID_EDGE, INVALID_NODE, MAX_WEIGHT};
use crate::edge_direction::EdgeDirection;
use crate::error::{PathCalculatorError, Result};
use crate::graph::{Graph, GraphEdge};
use crate::stopwatch::Stopwatch;
use crate::types::{EdgeId, NodeId};
use crate::weighting::{Weight, Weighting};

use super::node_data::{HeapItem, NodeData};
use super::routing_algorithm::{EdgeToEdgeRoutingAlgorithm, RoutingAlgorithm};
use super::routing_path::RoutingPath;
use super::routing_path_builder::build_routing_path;
use super::search_direction::SearchDirection;

/// Bidirectional Dijkstra on a weighted graph.
///
/// Supports edge to edge routing: the forward search may be forced to leave the
/// source through a given edge and the backward search to enter the target
/// through another one.
pub struct BidirectionalDijkstra<'a, G: Graph> {
    graph: &'a G,
    weighting: &'a dyn Weighting<G>,
    max_visited_nodes: usize,

    // Forward search (from source node)
    forward_heap: BinaryHeap<HeapItem>,
    forward_data: NodeData,

    // Backward search (from target node)
    backward_heap: BinaryHeap<HeapItem>,
    backward_data: NodeData,

    // Nodes a direction must never enter again, set when the first edge is forced
    forward_excluded_node: Option<NodeId>,
    backward_excluded_node: Option<NodeId>,

    // Best meeting point and total path weight
    best_meeting_node: NodeId,
    best_path_weight: Weight,

    visited_nodes: usize,
}

impl<'a, G: Graph> BidirectionalDijkstra<'a, G> {
    pub fn new(graph: &'a G, weighting: &'a dyn Weighting<G>) -> Self {
        BidirectionalDijkstra {
            graph,
            weighting,
            max_visited_nodes: usize::MAX,
            forward_heap: BinaryHeap::new(),
            forward_data: NodeData::default(),
            backward_heap: BinaryHeap::new(),
            backward_data: NodeData::default(),
            forward_excluded_node: None,
            backward_excluded_node: None,
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
        self.forward_excluded_node = None;
        self.backward_excluded_node = None;
        self.best_meeting_node = INVALID_NODE;
        self.best_path_weight = MAX_WEIGHT;
        self.visited_nodes = 0;
    }

    fn data(&self, dir: SearchDirection) -> &NodeData {
        match dir {
            SearchDirection::Forward => &self.forward_data,
            SearchDirection::Backward => &self.backward_data,
        }
    }

    fn data_mut(&mut self, dir: SearchDirection) -> &mut NodeData {
        match dir {
            SearchDirection::Forward => &mut self.forward_data,
            SearchDirection::Backward => &mut self.backward_data,
        }
    }

    fn heap_mut(&mut self, dir: SearchDirection) -> &mut BinaryHeap<HeapItem> {
        match dir {
            SearchDirection::Forward => &mut self.forward_heap,
            SearchDirection::Backward => &mut self.backward_heap,
        }
    }

    fn excluded_node(&self, dir: SearchDirection) -> Option<NodeId> {
        match dir {
            SearchDirection::Forward => self.forward_excluded_node,
            SearchDirection::Backward => self.backward_excluded_node,
        }
    }

    /// Direction in which `edge_id` is traversed when the search in `dir` goes from `node` to its neighbour
    fn traversal_direction(&self, dir: SearchDirection, edge_id: EdgeId, node: NodeId) -> EdgeDirection {
        match dir {
            SearchDirection::Forward => self.graph.edge_direction(edge_id, node),
            SearchDirection::Backward => self.graph.edge_direction(edge_id, node).opposite(),
        }
    }

    fn init_node(&mut self, dir: SearchDirection, node: NodeId) {
        self.data_mut(dir).update(node, 0, INVALID_NODE, INVALID_EDGE);
        self.heap_mut(dir).push(HeapItem {
            node_id: node,
            weight: 0,
        });
    }

    /// Starts the search in `dir` on the far side of `edge_id`, which must touch `node`
    fn init_edge(&mut self, dir: SearchDirection, node: NodeId, edge_id: EdgeId) -> bool {
        if edge_id >= self.graph.edge_count() {
            return false;
        }

        let edge = self.graph.edge(edge_id);
        if edge.start_node() != node && edge.end_node() != node {
            return false;
        }

        let direction = self.traversal_direction(dir, edge_id, node);
        let weight = self.weighting.calc_edge_weight(edge, direction);
        if weight == MAX_WEIGHT {
            return false;
        }

        let adj_node = edge.adj_node(node);
        match dir {
            SearchDirection::Forward => self.forward_excluded_node = Some(node),
            SearchDirection::Backward => self.backward_excluded_node = Some(node),
        }

        self.data_mut(dir).update(adj_node, weight, node, edge_id);
        self.heap_mut(dir).push(HeapItem {
            node_id: adj_node,
            weight,
        });

        true
    }

    /// Route made of `edge_id` alone, when it leads from `source` straight to `target`
    fn single_edge_path(
        &self,
        source: NodeId,
        target: NodeId,
        edge_id: EdgeId,
    ) -> Option<RoutingPath> {
        if source == target || edge_id >= self.graph.edge_count() {
            return None;
        }

        let edge = self.graph.edge(edge_id);
        let joins_endpoints = (edge.start_node() == source && edge.end_node() == target)
            || (edge.start_node() == target && edge.end_node() == source);
        if !joins_endpoints {
            return None;
        }

        let direction = self.graph.edge_direction(edge_id, source);
        let weight = self.weighting.calc_edge_weight(edge, direction);
        if weight == MAX_WEIGHT {
            return None;
        }

        Some(build_routing_path(
            self.graph,
            self.weighting,
            vec![(edge_id, direction)],
            weight,
        ))
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

    fn process_node(&mut self, dir: SearchDirection, node_id: NodeId, weight: Weight) {
        let graph = self.graph;
        let excluded_node = self.excluded_node(dir);

        for edge_id in graph.node_edges_iter(node_id) {
            let edge = graph.edge(edge_id);
            let adj_node = edge.adj_node(node_id);

            if Some(adj_node) == excluded_node || self.data(dir).is_settled(adj_node) {
                continue;
            }

            let direction = self.traversal_direction(dir, edge_id, node_id);
            let edge_weight = self.weighting.calc_edge_weight(edge, direction);
            if edge_weight == MAX_WEIGHT {
                continue;
            }

            let next_weight = weight.saturating_add(edge_weight);
            if next_weight < self.data(dir).weight(adj_node) {
                self.data_mut(dir).update(adj_node, next_weight, node_id, edge_id);
                self.heap_mut(dir).push(HeapItem {
                    node_id: adj_node,
                    weight: next_weight,
                });
                self.update_best_path(adj_node);
            }
        }

        self.data_mut(dir).set_settled(node_id);
    }

    fn finished(&self) -> bool {
        if self.best_meeting_node == INVALID_NODE {
            return false;
        }

        let min_forward_weight = self.forward_heap.peek().map_or(MAX_WEIGHT, |item| item.weight);
        let min_backward_weight = self
            .backward_heap
            .peek()
            .map_or(MAX_WEIGHT, |item| item.weight);

        min_forward_weight.saturating_add(min_backward_weight) >= self.best_path_weight
    }

    fn run(&mut self) {
        let mut active_direction = SearchDirection::Backward;

        loop {
            if self.finished() {
                break;
            }

            let Some(direction) = active_direction.next(
                !self.forward_heap.is_empty(),
                !self.backward_heap.is_empty(),
            ) else {
                break;
            };
            active_direction = direction;

            let Some(HeapItem { node_id, weight }) = self.heap_mut(active_direction).pop() else {
                continue;
            };

            if self.data(active_direction).is_settled(node_id)
                || weight > self.data(active_direction).weight(node_id)
            {
                continue;
            }

            self.process_node(active_direction, node_id, weight);
            self.visited_nodes += 1;

            if self.visited_nodes > self.max_visited_nodes {
                break;
            }
        }
    }

    fn build_forward_path(&self, node: NodeId) -> Vec<(EdgeId, EdgeDirection)> {
        let mut path = Vec::with_capacity(32);
        let mut current_node = node;

        while let Some(entry) = self.forward_data.get(current_node) {
            if entry.parent == INVALID_NODE {
                break;
            }

            path.push((
                entry.edge_id,
                self.graph.edge_direction(entry.edge_id, entry.parent),
            ));
            current_node = entry.parent;
        }

        path.reverse();
        path
    }

    fn build_backward_path(&self, node: NodeId) -> Vec<(EdgeId, EdgeDirection)> {
        let mut path = Vec::with_capacity(32);
        let mut current_node = node;

        while let Some(entry) = self.backward_data.get(current_node) {
            if entry.parent == INVALID_NODE {
                break;
            }

            path.push((
                entry.edge_id,
                self.graph.edge_direction(entry.edge_id, current_node),
            ));
            current_node = entry.parent;
        }

        path
    }

    fn search(&mut self, source: NodeId, target: NodeId) -> Result<Vec<RoutingPath>> {
        let stopwatch = Stopwatch::new("bidirectional_dijkstra/calc_paths");

        self.run();

        debug!(
            "BidirectionalDijkstra nodes visited: {}",
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

            return Err(PathCalculatorError::ConnectionNotFound {
                source_node: source,
                target_node: target,
            });
        }

        let meeting_node = self.best_meeting_node;
        let mut edges = self.build_forward_path(meeting_node);
        edges.extend(self.build_backward_path(meeting_node));

        let weight = self
            .forward_data
            .weight(meeting_node)
            .saturating_add(self.backward_data.weight(meeting_node));

        Ok(vec![build_routing_path(
            self.graph,
            self.weighting,
            edges,
            weight,
        )])
    }
}

impl<G: Graph> RoutingAlgorithm for BidirectionalDijkstra<'_, G> {
    fn name(&self) -> &str {
        "bidirectional_dijkstra"
    }

    fn calc_paths(&mut self, source: NodeId, target: NodeId) -> Result<Vec<RoutingPath>> {
        self.calc_paths_edge_to_edge(source, target, None, None)
    }

    fn visited_nodes(&self) -> usize {
        self.visited_nodes
    }

    fn as_edge_to_edge(&mut self) -> Option<&mut dyn EdgeToEdgeRoutingAlgorithm> {
        Some(self)
    }
}

impl<G: Graph> EdgeToEdgeRoutingAlgorithm for BidirectionalDijkstra<'_, G> {
    fn calc_paths_edge_to_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        source_out_edge: Option<EdgeId>,
        target_in_edge: Option<EdgeId>,
    ) -> Result<Vec<RoutingPath>> {
        self.reset();

        let not_found = PathCalculatorError::ConnectionNotFound {
            source_node: source,
            target_node: target,
        };

        // Leaving and arriving through the same edge: the two searches would each exclude
        // the node the other one starts from and never meet
        if let (Some(out_edge), Some(in_edge)) = (source_out_edge, target_in_edge) {
            if out_edge == in_edge {
                if let Some(path) = self.single_edge_path(source, target, out_edge) {
                    return Ok(vec![path]);
                }
            }
        }

        match source_out_edge {
            Some(edge_id) => {
                if !self.init_edge(SearchDirection::Forward, source, edge_id) {
                    return Err(not_found);
                }
            }
            None => self.init_node(SearchDirection::Forward, source),
        }

        match target_in_edge {
            Some(edge_id) => {
                if !self.init_edge(SearchDirection::Backward, target, edge_id) {
                    return Err(not_found);
                }
            }
            None => self.init_node(SearchDirection::Backward, target),
        }

        // Both searches may already start on the same node
        for node in [
            self.forward_heap.peek().map(|item| item.node_id),
            self.backward_heap.peek().map(|item| item.node_id),
        ]
        .into_iter()
        .flatten()
        {
            self.update_best_path(node);
        }

        self.search(source, target)
    }
}
