#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use tracing::warn;

use crate::core::{CellValue, ColumnNode, GridRow};
use crate::error::GridError;

/// Cell produced for one visible leaf column of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleCell {
    pub column_id: String,
    pub value: CellValue,
    /// Accessor failure that was replaced by `CellValue::Empty`.
    pub error: Option<GridError>,
}

/// Reads one cell, substituting `Empty` when the accessor fails.
pub fn project_cell<R: GridRow>(column: &ColumnNode<R>, row: &R) -> VisibleCell {
    let Some(accessor) = column.accessor() else {
        return VisibleCell {
            column_id: column.id().to_owned(),
            value: CellValue::Empty,
            error: None,
        };
    };
    match accessor.read(row) {
        Ok(value) => VisibleCell {
            column_id: column.id().to_owned(),
            value,
            error: None,
        },
        Err(message) => {
            warn!(
                column_id = column.id(),
                error = %message,
                "accessor failed; substituting empty cell"
            );
            VisibleCell {
                column_id: column.id().to_owned(),
                value: CellValue::Empty,
                error: Some(GridError::Accessor {
                    column_id: column.id().to_owned(),
                    message,
                }),
            }
        }
    }
}

#[must_use]
pub fn project_row_values<R: GridRow>(columns: &[&ColumnNode<R>], row: &R) -> Vec<CellValue> {
    columns
        .iter()
        .map(|column| project_cell(column, row).value)
        .collect()
}

#[must_use]
pub fn project_rows<R: GridRow>(columns: &[&ColumnNode<R>], rows: &[R]) -> Vec<Vec<CellValue>> {
    rows.iter()
        .map(|row| project_row_values(columns, row))
        .collect()
}

/// Same output as [`project_rows`], computed across the rayon pool.
#[cfg(feature = "parallel-projection")]
#[must_use]
pub fn par_project_rows<R: GridRow + Sync>(
    columns: &[&ColumnNode<R>],
    rows: &[R],
) -> Vec<Vec<CellValue>> {
    rows.par_iter()
        .map(|row| project_row_values(columns, row))
        .collect()
}
