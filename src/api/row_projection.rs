use crate::core::{
    CellValue, ColumnRegion, GridRow, RowWindow, VisibleCell, project_cell, project_row_values,
    project_rows, rows_in_window,
};

use super::GridEngine;

impl<R: GridRow> GridEngine<R> {
    /// One value per visible leaf column, in render order.
    ///
    /// Accessor failures are logged and replaced by [`CellValue::Empty`]; the
    /// rest of the row still renders.
    #[must_use]
    pub fn visible_row_cells(&self, row: &R) -> Vec<CellValue> {
        project_row_values(&self.visible_leaf_columns(), row)
    }

    /// Like [`GridEngine::visible_row_cells`], keeping column ids and any
    /// recovered accessor error per cell.
    #[must_use]
    pub fn visible_cells(&self, row: &R) -> Vec<VisibleCell> {
        self.visible_leaf_columns()
            .into_iter()
            .map(|column| project_cell(column, row))
            .collect()
    }

    /// Cells of one split-layout region.
    #[must_use]
    pub fn region_row_cells(&self, row: &R, region: ColumnRegion) -> Vec<CellValue> {
        project_row_values(&self.region_leaf_columns(region), row)
    }

    /// Visible cells for every row inside `window`.
    #[must_use]
    pub fn visible_rows_cells(&self, window: RowWindow) -> Vec<Vec<CellValue>> {
        let columns = self.visible_leaf_columns();
        project_rows(&columns, rows_in_window(&self.core.model.rows, window))
    }

    /// Parallel variant of [`GridEngine::visible_rows_cells`] for large row sets.
    #[cfg(feature = "parallel-projection")]
    #[must_use]
    pub fn par_visible_rows_cells(&self, window: RowWindow) -> Vec<Vec<CellValue>>
    where
        R: Sync,
    {
        let columns = self.visible_leaf_columns();
        crate::core::par_project_rows(&columns, rows_in_window(&self.core.model.rows, window))
    }
}
