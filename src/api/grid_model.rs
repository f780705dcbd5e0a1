use crate::core::ColumnTree;

use super::GridState;

/// Core grid domain state: column tree, row snapshot and committed state.
pub(super) struct GridModel<R> {
    pub(super) tree: ColumnTree<R>,
    pub(super) rows: Vec<R>,
    pub(super) state: GridState,
    pub(super) version: u64,
}

impl<R> GridModel<R> {
    #[must_use]
    pub(super) fn new(tree: ColumnTree<R>, rows: Vec<R>, state: GridState) -> Self {
        Self {
            tree,
            rows,
            state,
            version: 0,
        }
    }

    /// Marks one successful command; memoized views keyed on the old version go stale.
    pub(super) fn bump_version(&mut self) -> u64 {
        self.version += 1;
        self.version
    }

    /// Swaps in a fully built state in one step.
    pub(super) fn commit_state(&mut self, state: GridState) -> u64 {
        self.state = state;
        self.bump_version()
    }
}
