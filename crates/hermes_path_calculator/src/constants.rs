use crate::weighting::{Milliseconds, Weight};

pub(crate) const INVALID_NODE: usize = usize::MAX;
pub(crate) const INVALID_EDGE: usize = usize::MAX;
pub(crate) const MAX_WEIGHT: Weight = u32::MAX;
pub(crate) const MAX_DURATION: Milliseconds = u32::MAX;

/// Weight added on top of an unfavored edge. Large enough to make any
/// reasonable detour cheaper, small enough to keep the edge routable.
pub(crate) const UNFAVORED_EDGE_PENALTY: Weight = 1_000_000;
