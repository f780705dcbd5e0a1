pub mod column;
pub mod header;
pub mod layout;
pub mod projection;
pub mod types;
pub mod windowing;

pub use column::{
    Accessor, AccessorFn, ColumnDef, ColumnDefaults, ColumnKind, ColumnNode, ColumnSizing,
    ColumnTree,
};
pub use header::{HeaderCell, HeaderGroup, build_header_groups, footer_groups_from_headers};
pub use layout::{ColumnLayout, LayoutColumn, compute_column_layout, total_layout_width};
pub use projection::{VisibleCell, project_cell, project_row_values, project_rows};
#[cfg(feature = "parallel-projection")]
pub use projection::par_project_rows;
pub use types::{CellValue, ColumnRegion, GridRow, PinSide};
pub use windowing::{RowWindow, rows_in_window};
