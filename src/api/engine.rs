use std::fmt;

use crate::core::{ColumnNode, ColumnTree};
use crate::interaction::ResizeInteractionState;

use super::{DerivedCacheStats, GridEngineConfig, GridState, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `GridEngine` owns the column tree, the row snapshot and the committed
/// [`GridState`]. Commands take `&mut self`, validate, apply in one step and
/// bump [`GridEngine::state_version`]; queries take `&self` and are memoized
/// on that version. The memo uses interior mutability, so an engine is
/// confined to one owner and is not `Sync`.
pub struct GridEngine<R> {
    pub(super) core: EngineCore<R>,
}

impl<R> fmt::Debug for GridEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridEngine")
            .field("config", &self.core.config)
            .field("state", &self.core.model.state)
            .field("version", &self.core.model.version)
            .field("rows", &self.core.model.rows.len())
            .field("resize", &self.core.runtime.resize)
            .finish_non_exhaustive()
    }
}

impl<R> GridEngine<R> {
    #[must_use]
    pub fn config(&self) -> GridEngineConfig {
        self.core.config
    }

    /// Monotonic counter bumped by every successful command.
    #[must_use]
    pub fn state_version(&self) -> u64 {
        self.core.model.version
    }

    #[must_use]
    pub fn state(&self) -> &GridState {
        &self.core.model.state
    }

    #[must_use]
    pub fn columns(&self) -> &ColumnTree<R> {
        &self.core.model.tree
    }

    #[must_use]
    pub fn column(&self, column_id: &str) -> Option<&ColumnNode<R>> {
        self.core.model.tree.get(column_id)
    }

    #[must_use]
    pub fn resize_interaction(&self) -> &ResizeInteractionState {
        &self.core.runtime.resize
    }

    #[must_use]
    pub fn derived_cache_stats(&self) -> DerivedCacheStats {
        self.core.runtime.cache.stats()
    }
}
