#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum SearchDirection {
    Forward,
    Backward,
}

impl SearchDirection {
    pub fn opposite(self) -> Self {
        match self {
            SearchDirection::Forward => SearchDirection::Backward,
            SearchDirection::Backward => SearchDirection::Forward,
        }
    }

    /// Direction to expand after `self`: alternates while both sides can
    /// progress, sticks to the one left otherwise. `None` once both are done.
    pub fn next(self, forward_open: bool, backward_open: bool) -> Option<Self> {
        match (forward_open, backward_open) {
            (true, true) => Some(self.opposite()),
            (true, false) => Some(SearchDirection::Forward),
            (false, true) => Some(SearchDirection::Backward),
            (false, false) => None,
        }
    }
}
