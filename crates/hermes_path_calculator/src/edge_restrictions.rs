use fxhash::FxHashSet;

use crate::types::EdgeId;

/// Per request edge level constraints.
///
/// `source_out_edge` forces the edge leaving the source, `target_in_edge` the edge arriving
/// at the target. Unfavored edges are penalized during the search but stay routable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EdgeRestrictions {
    source_out_edge: Option<EdgeId>,
    target_in_edge: Option<EdgeId>,
    unfavored_edges: FxHashSet<EdgeId>,
}

impl EdgeRestrictions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_out_edge(&self) -> Option<EdgeId> {
        self.source_out_edge
    }

    pub fn set_source_out_edge(&mut self, edge: EdgeId) {
        self.source_out_edge = Some(edge);
    }

    pub fn target_in_edge(&self) -> Option<EdgeId> {
        self.target_in_edge
    }

    pub fn set_target_in_edge(&mut self, edge: EdgeId) {
        self.target_in_edge = Some(edge);
    }

    pub fn unfavored_edges(&self) -> &FxHashSet<EdgeId> {
        &self.unfavored_edges
    }

    pub fn unfavored_edges_mut(&mut self) -> &mut FxHashSet<EdgeId> {
        &mut self.unfavored_edges
    }

    pub fn add_unfavored_edge(&mut self, edge: EdgeId) {
        self.unfavored_edges.insert(edge);
    }

    /// True when the caller asked to leave the source or reach the target through a given edge
    pub fn has_direction_restrictions(&self) -> bool {
        self.source_out_edge.is_some() || self.target_in_edge.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_restrictions() {
        let restrictions = EdgeRestrictions::new();

        assert_eq!(restrictions.source_out_edge(), None);
        assert_eq!(restrictions.target_in_edge(), None);
        assert!(restrictions.unfavored_edges().is_empty());
        assert!(!restrictions.has_direction_restrictions());
    }

    #[test]
    fn test_direction_restrictions() {
        let mut restrictions = EdgeRestrictions::new();
        restrictions.set_target_in_edge(7);

        assert!(restrictions.has_direction_restrictions());
        assert_eq!(restrictions.target_in_edge(), Some(7));
    }

    #[test]
    fn test_unfavored_edges_ignore_order_and_duplicates() {
        let mut restrictions = EdgeRestrictions::new();
        restrictions.add_unfavored_edge(102);
        restrictions.add_unfavored_edge(100);
        restrictions.unfavored_edges_mut().extend([101, 100]);

        assert_eq!(restrictions.unfavored_edges().len(), 3);
        assert!(!restrictions.has_direction_restrictions());
    }
}
