use std::cmp::Ordering;

use fxhash::FxHashMap;

use crate::{
    constants::{INVALID_EDGE, INVALID_NODE, MAX_WEIGHT},
    types::{EdgeId, NodeId},
    weighting::Weight,
};

#[derive(Eq, Copy, Clone, Debug)]
pub(crate) struct HeapItem {
    pub node_id: NodeId,
    pub weight: Weight,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.weight == other.weight && self.node_id == other.node_id
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeDataEntry {
    pub settled: bool,
    pub weight: Weight,
    pub parent: NodeId,
    /// Edge from parent to current node
    pub edge_id: EdgeId,
}

impl NodeDataEntry {
    fn new() -> Self {
        NodeDataEntry {
            settled: false,
            weight: MAX_WEIGHT,
            parent: INVALID_NODE,
            edge_id: INVALID_EDGE,
        }
    }
}

/// Search labels of a single direction, allocated lazily per touched node
#[derive(Default)]
pub(crate) struct NodeData {
    data: FxHashMap<NodeId, NodeDataEntry>,
}

impl NodeData {
    pub fn get(&self, node: NodeId) -> Option<&NodeDataEntry> {
        self.data.get(&node)
    }

    pub fn weight(&self, node: NodeId) -> Weight {
        self.data.get(&node).map_or(MAX_WEIGHT, |entry| entry.weight)
    }

    pub fn is_settled(&self, node: NodeId) -> bool {
        self.data.get(&node).is_some_and(|entry| entry.settled)
    }

    pub fn set_settled(&mut self, node: NodeId) {
        self.data.entry(node).or_insert_with(NodeDataEntry::new).settled = true;
    }

    pub fn update(&mut self, node: NodeId, weight: Weight, parent: NodeId, edge_id: EdgeId) {
        let entry = self.data.entry(node).or_insert_with(NodeDataEntry::new);
        entry.weight = weight;
        entry.parent = parent;
        entry.edge_id = edge_id;
        entry.settled = false;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn test_heap_pops_lowest_weight_first() {
        let mut heap = BinaryHeap::new();
        heap.push(HeapItem {
            node_id: 1,
            weight: 30,
        });
        heap.push(HeapItem {
            node_id: 2,
            weight: 10,
        });
        heap.push(HeapItem {
            node_id: 3,
            weight: 20,
        });

        let order: Vec<NodeId> = std::iter::from_fn(|| heap.pop().map(|item| item.node_id)).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_node_data_defaults_to_unreached() {
        let mut data = NodeData::default();
        assert_eq!(data.weight(4), MAX_WEIGHT);
        assert!(!data.is_settled(4));

        data.update(4, 12, 1, 0);
        data.set_settled(4);
        assert_eq!(data.weight(4), 12);
        assert!(data.is_settled(4));
        assert_eq!(data.get(4).map(|entry| entry.parent), Some(1));
    }
}
