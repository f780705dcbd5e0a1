use tracing::{debug, warn};

use crate::core::PinSide;
use crate::error::{GridError, GridResult};
use crate::extensions::GridEvent;

use super::GridEngine;

impl<R> GridEngine<R> {
    /// Pins a column to `side`, or clears its pin with `None`.
    ///
    /// A column holds at most one side, so pinning to the opposite side
    /// replaces the previous pin. A group id applies to every pinnable
    /// leaf under it.
    pub fn pin(&mut self, column_id: &str, side: Option<PinSide>) -> GridResult<()> {
        let tree = &self.core.model.tree;
        let Some(slot) = tree.slot_of(column_id) else {
            warn!(column_id, "ignoring pin change for unknown column");
            return Err(GridError::UnknownColumn(column_id.to_owned()));
        };
        if !self.can_pin(column_id) {
            warn!(column_id, "ignoring pin change for non-pinnable column");
            return Err(GridError::PinNotAllowed(column_id.to_owned()));
        }
        let targets: Vec<String> = tree
            .leaf_descendants(slot)
            .into_iter()
            .map(|leaf| tree.node(leaf))
            .filter(|leaf| leaf.is_pinnable())
            .map(|leaf| leaf.id().to_owned())
            .collect();

        let pinning = &mut self.core.model.state.pinning;
        for id in &targets {
            match side {
                Some(side) => {
                    pinning.insert(id.clone(), side);
                }
                None => {
                    pinning.shift_remove(id);
                }
            }
        }
        let version = self.core.model.bump_version();
        debug!(column_id, ?side, version, "set column pinning");
        self.emit_plugin_event(GridEvent::PinningChanged {
            column_ids: targets,
            side,
        });
        Ok(())
    }

    /// Clears every pin in one step.
    pub fn reset_pinning(&mut self) {
        let cleared: Vec<String> = self.core.model.state.pinning.keys().cloned().collect();
        self.core.model.state.pinning.clear();
        let version = self.core.model.bump_version();
        debug!(cleared = cleared.len(), version, "reset column pinning");
        self.emit_plugin_event(GridEvent::PinningChanged {
            column_ids: cleared,
            side: None,
        });
    }

    /// Leaf: its pin. Group: the side shared by all its pinnable leaves, if any.
    #[must_use]
    pub fn column_pin(&self, column_id: &str) -> Option<PinSide> {
        let tree = &self.core.model.tree;
        let state = &self.core.model.state;
        let slot = tree.slot_of(column_id)?;
        let mut sides = tree
            .leaf_descendants(slot)
            .into_iter()
            .map(|leaf| tree.node(leaf))
            .filter(|leaf| leaf.is_pinnable())
            .map(|leaf| state.pin_of(leaf.id()));
        let first = sides.next()??;
        sides.all(|side| side == Some(first)).then_some(first)
    }

    #[must_use]
    pub fn is_column_pinned(&self, column_id: &str) -> bool {
        self.column_pin(column_id).is_some()
    }

    /// A column can pin when pinning is enabled and it has a pinnable leaf.
    #[must_use]
    pub fn can_pin(&self, column_id: &str) -> bool {
        if !self.core.config.enable_pinning {
            return false;
        }
        let tree = &self.core.model.tree;
        tree.slot_of(column_id).is_some_and(|slot| {
            tree.node(slot).is_pinnable()
                && tree
                    .leaf_descendants(slot)
                    .into_iter()
                    .any(|leaf| tree.node(leaf).is_pinnable())
        })
    }

    /// Pinned leaf ids on `side`, following the column order.
    #[must_use]
    pub fn pinned_column_ids(&self, side: PinSide) -> Vec<String> {
        let state = &self.core.model.state;
        state
            .order
            .iter()
            .filter(|id| state.pin_of(id) == Some(side))
            .cloned()
            .collect()
    }
}
