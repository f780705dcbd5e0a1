use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Contiguous slice of rows handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowWindow {
    pub start: usize,
    pub len: usize,
}

impl RowWindow {
    #[must_use]
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Leading window of `len` rows.
    #[must_use]
    pub fn head(len: usize) -> Self {
        Self { start: 0, len }
    }

    /// Index range clamped to a row set of `total` rows; may be empty.
    #[must_use]
    pub fn clamp_to(self, total: usize) -> Range<usize> {
        let start = self.start.min(total);
        let end = self.start.saturating_add(self.len).min(total);
        start..end
    }
}

/// Returns the rows inside `window`, clamped to the available rows.
#[must_use]
pub fn rows_in_window<R>(rows: &[R], window: RowWindow) -> &[R] {
    &rows[window.clamp_to(rows.len())]
}
