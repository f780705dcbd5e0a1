use tracing::{debug, warn};

use crate::error::{GridError, GridResult};
use crate::extensions::GridEvent;

use super::GridEngine;

impl<R> GridEngine<R> {
    /// Shows or hides one column. A group id applies to all its leaves.
    ///
    /// Unknown ids are reported as [`GridError::UnknownColumn`] and leave
    /// state untouched.
    pub fn set_visibility(&mut self, column_id: &str, visible: bool) -> GridResult<()> {
        let tree = &self.core.model.tree;
        let Some(slot) = tree.slot_of(column_id) else {
            warn!(column_id, "ignoring visibility change for unknown column");
            return Err(GridError::UnknownColumn(column_id.to_owned()));
        };

        let leaves: Vec<String> = if visible {
            tree.leaf_descendants(slot)
                .into_iter()
                .map(|leaf| tree.node(leaf).id().to_owned())
                .collect()
        } else {
            let hideable: Vec<String> = tree
                .leaf_descendants(slot)
                .into_iter()
                .map(|leaf| tree.node(leaf))
                .filter(|leaf| self.core.config.enable_hiding && leaf.is_hideable())
                .map(|leaf| leaf.id().to_owned())
                .collect();
            if hideable.is_empty() {
                warn!(column_id, "ignoring hide request for non-hideable column");
                return Err(GridError::HideNotAllowed(column_id.to_owned()));
            }
            hideable
        };

        let visibility = &mut self.core.model.state.visibility;
        for id in &leaves {
            if visible {
                visibility.shift_remove(id);
            } else {
                visibility.insert(id.clone(), false);
            }
        }
        let version = self.core.model.bump_version();
        debug!(column_id, visible, version, "set column visibility");
        self.emit_plugin_event(GridEvent::VisibilityChanged {
            column_ids: leaves,
            visible,
        });
        Ok(())
    }

    /// Sets every hideable leaf in one step and one version bump.
    pub fn toggle_all_visibility(&mut self, visible: bool) {
        let tree = &self.core.model.tree;
        let leaves: Vec<String> = tree
            .leaf_slots()
            .iter()
            .map(|slot| tree.node(*slot))
            .filter(|leaf| visible || (self.core.config.enable_hiding && leaf.is_hideable()))
            .map(|leaf| leaf.id().to_owned())
            .collect();

        let mut visibility = self.core.model.state.visibility.clone();
        if visible {
            visibility.clear();
        } else {
            for id in &leaves {
                visibility.insert(id.clone(), false);
            }
        }
        self.core.model.state.visibility = visibility;
        let version = self.core.model.bump_version();
        debug!(visible, version, "toggled visibility for all columns");
        self.emit_plugin_event(GridEvent::VisibilityChanged {
            column_ids: leaves,
            visible,
        });
    }

    /// Leaf: its own flag. Group: visible when any leaf under it is.
    #[must_use]
    pub fn is_column_visible(&self, column_id: &str) -> bool {
        let tree = &self.core.model.tree;
        let state = &self.core.model.state;
        tree.slot_of(column_id).is_some_and(|slot| {
            tree.leaf_descendants(slot)
                .into_iter()
                .any(|leaf| state.is_visible(tree.node(leaf).id()))
        })
    }

    #[must_use]
    pub fn is_all_columns_visible(&self) -> bool {
        let tree = &self.core.model.tree;
        tree.leaf_slots()
            .iter()
            .all(|slot| self.core.model.state.is_visible(tree.node(*slot).id()))
    }

    #[must_use]
    pub fn is_some_columns_visible(&self) -> bool {
        let tree = &self.core.model.tree;
        tree.leaf_slots()
            .iter()
            .any(|slot| self.core.model.state.is_visible(tree.node(*slot).id()))
    }
}
