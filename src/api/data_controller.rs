use tracing::debug;

use crate::core::{RowWindow, rows_in_window};
use crate::extensions::GridEvent;

use super::GridEngine;

impl<R> GridEngine<R> {
    /// Replaces the row snapshot in one step.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        let row_count = rows.len();
        self.core.model.rows = rows;
        let version = self.core.model.bump_version();
        debug!(row_count, version, "replaced rows");
        self.emit_plugin_event(GridEvent::RowsReplaced { row_count });
    }

    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.core.model.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.core.model.rows.len()
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&R> {
        self.core.model.rows.get(index)
    }

    /// Rows inside `window`, clamped to the row count.
    #[must_use]
    pub fn row_window(&self, window: RowWindow) -> &[R] {
        rows_in_window(&self.core.model.rows, window)
    }
}
