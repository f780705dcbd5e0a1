use tracing::{debug, trace, warn};

use crate::core::ColumnNode;
use crate::error::{GridError, GridResult};
use crate::extensions::GridEvent;
use crate::interaction::ResizeMode;

use super::GridEngine;

impl<R> GridEngine<R> {
    /// Leaf columns resize when resizing is enabled and the column allows it.
    #[must_use]
    pub fn can_resize(&self, column_id: &str) -> bool {
        self.core.config.enable_column_resizing
            && self
                .core
                .model
                .tree
                .get(column_id)
                .is_some_and(|column| column.is_leaf() && column.is_resizable())
    }

    /// `true` while a resize gesture is active for `column_id`.
    #[must_use]
    pub fn is_resizing(&self, column_id: &str) -> bool {
        self.core.runtime.resize.is_dragging(column_id)
    }

    /// Committed width. Groups report the sum of their visible leaves.
    #[must_use]
    pub fn column_width(&self, column_id: &str) -> Option<f64> {
        let tree = &self.core.model.tree;
        let slot = tree.slot_of(column_id)?;
        let node = tree.node(slot);
        if node.is_leaf() {
            return Some(self.committed_leaf_width(node));
        }
        Some(
            tree.leaf_descendants(slot)
                .into_iter()
                .map(|leaf| tree.node(leaf))
                .filter(|leaf| self.core.model.state.is_visible(leaf.id()))
                .map(|leaf| self.committed_leaf_width(leaf))
                .sum(),
        )
    }

    /// Width including the uncommitted buffer of an active on-commit gesture.
    #[must_use]
    pub fn column_preview_width(&self, column_id: &str) -> Option<f64> {
        match self.core.runtime.resize.gesture() {
            Some(gesture) if gesture.column_id == column_id => {
                let column = self.core.model.tree.get(column_id)?;
                Some(
                    column
                        .sizing()
                        .clamp(gesture.start_width + gesture.pending_delta),
                )
            }
            _ => self.column_width(column_id),
        }
    }

    /// Enters the dragging state for `column_id`.
    ///
    /// Fails with [`GridError::ConcurrentResize`] while another column is
    /// dragging; the active gesture stays in place.
    pub fn start_resize(&mut self, column_id: &str) -> GridResult<()> {
        let width = {
            let column = self.resizable_column(column_id)?;
            self.committed_leaf_width(column)
        };
        let started = self
            .core
            .runtime
            .resize
            .on_resize_start(column_id, width)
            .inspect_err(|err| warn!(error = %err, "rejecting resize start"))?;
        if started {
            debug!(column_id, width, "resize gesture started");
            self.emit_plugin_event(GridEvent::ResizeStarted {
                column_id: column_id.to_owned(),
            });
        }
        Ok(())
    }

    /// Applies a width delta and returns the resulting width.
    ///
    /// `Live` commits immediately (one version bump per call). `OnCommit`
    /// buffers the delta in the gesture, starting one if idle, and returns
    /// the preview width; [`GridEngine::end_resize`] flushes it.
    pub fn resize(&mut self, column_id: &str, delta: f64, mode: ResizeMode) -> GridResult<f64> {
        if !delta.is_finite() {
            return Err(GridError::InvalidData(
                "resize delta must be finite".to_owned(),
            ));
        }
        let (sizing, current) = {
            let column = self.resizable_column(column_id)?;
            (column.sizing(), self.committed_leaf_width(column))
        };
        self.core
            .runtime
            .resize
            .ensure_available_for(column_id)
            .inspect_err(|err| warn!(error = %err, "rejecting resize delta"))?;

        match mode {
            ResizeMode::Live => {
                let width = sizing.clamp(current + delta);
                self.commit_width(column_id, width, mode);
                self.core.runtime.resize.rebase(column_id, width);
                Ok(width)
            }
            ResizeMode::OnCommit => {
                self.start_resize(column_id)?;
                let gesture = self.core.runtime.resize.accumulate(column_id, delta)?;
                let preview = sizing.clamp(gesture.start_width + gesture.pending_delta);
                trace!(column_id, delta, preview, "buffered resize delta");
                Ok(preview)
            }
        }
    }

    /// Leaves the dragging state, flushing buffered deltas in one version bump.
    ///
    /// Returns the column's committed width, or `None` when no gesture was active.
    pub fn end_resize(&mut self) -> Option<f64> {
        let gesture = self.core.runtime.resize.on_resize_end()?;
        let column_id = gesture.column_id.clone();
        let committed = gesture.has_pending();
        if committed {
            if let Some(sizing) = self.core.model.tree.get(&column_id).map(ColumnNode::sizing) {
                let width = sizing.clamp(gesture.start_width + gesture.pending_delta);
                self.commit_width(&column_id, width, ResizeMode::OnCommit);
            }
        }
        debug!(column_id = %column_id, committed, "resize gesture ended");
        let width = self.column_width(&column_id);
        self.emit_plugin_event(GridEvent::ResizeEnded {
            column_id,
            committed,
        });
        width
    }

    /// Drops the active gesture and its buffer without touching committed widths.
    pub fn cancel_resize(&mut self) -> Option<String> {
        let gesture = self.core.runtime.resize.on_resize_end()?;
        debug!(column_id = %gesture.column_id, "resize gesture cancelled");
        self.emit_plugin_event(GridEvent::ResizeEnded {
            column_id: gesture.column_id.clone(),
            committed: false,
        });
        Some(gesture.column_id)
    }

    /// Restores the default width of a leaf, or of every leaf under a group.
    pub fn reset_column_width(&mut self, column_id: &str) -> GridResult<()> {
        let tree = &self.core.model.tree;
        let Some(slot) = tree.slot_of(column_id) else {
            warn!(column_id, "ignoring width reset for unknown column");
            return Err(GridError::UnknownColumn(column_id.to_owned()));
        };
        let defaults: Vec<(String, f64)> = tree
            .leaf_descendants(slot)
            .into_iter()
            .map(|leaf| tree.node(leaf))
            .map(|leaf| (leaf.id().to_owned(), leaf.sizing().default_width))
            .collect();
        self.apply_widths(defaults);
        Ok(())
    }

    pub fn reset_all_widths(&mut self) {
        let tree = &self.core.model.tree;
        let defaults: Vec<(String, f64)> = tree
            .leaf_slots()
            .iter()
            .map(|slot| tree.node(*slot))
            .map(|leaf| (leaf.id().to_owned(), leaf.sizing().default_width))
            .collect();
        self.apply_widths(defaults);
    }

    fn resizable_column(&self, column_id: &str) -> GridResult<&ColumnNode<R>> {
        let Some(column) = self.core.model.tree.get(column_id) else {
            warn!(column_id, "ignoring resize of unknown column");
            return Err(GridError::UnknownColumn(column_id.to_owned()));
        };
        if !self.can_resize(column_id) {
            warn!(column_id, "ignoring resize of non-resizable column");
            return Err(GridError::ResizeNotAllowed(column_id.to_owned()));
        }
        Ok(column)
    }

    fn commit_width(&mut self, column_id: &str, width: f64, mode: ResizeMode) {
        self.core
            .model
            .state
            .widths
            .insert(column_id.to_owned(), width);
        let version = self.core.model.bump_version();
        trace!(column_id, width, version, "committed column width");
        self.emit_plugin_event(GridEvent::ColumnResized {
            column_id: column_id.to_owned(),
            width,
            mode,
        });
    }

    fn apply_widths(&mut self, widths: Vec<(String, f64)>) {
        for (id, width) in &widths {
            self.core.model.state.widths.insert(id.clone(), *width);
            self.core.runtime.resize.rebase(id, *width);
        }
        let version = self.core.model.bump_version();
        debug!(columns = widths.len(), version, "reset column widths");
        self.emit_plugin_event(GridEvent::WidthsReset {
            column_ids: widths.into_iter().map(|(id, _)| id).collect(),
        });
    }
}
