use serde::{Deserialize, Serialize};

use crate::core::{ColumnRegion, PinSide};

/// Input for horizontal layout of one visible leaf column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutColumn<'a> {
    pub id: &'a str,
    pub width: f64,
    pub pin: Option<PinSide>,
}

/// Resolved horizontal placement of one visible leaf column.
///
/// `sticky_offset` is the distance from the pinned edge: left offset for
/// left-pinned columns, right offset for right-pinned ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub column_id: String,
    pub start: f64,
    pub width: f64,
    pub pin: Option<PinSide>,
    pub sticky_offset: Option<f64>,
}

impl ColumnLayout {
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.width
    }

    #[must_use]
    pub fn region(&self) -> ColumnRegion {
        ColumnRegion::from_pin(self.pin)
    }
}

/// Lays columns out left to right in the given (already pinned-partitioned) order.
#[must_use]
pub fn compute_column_layout(columns: &[LayoutColumn<'_>]) -> Vec<ColumnLayout> {
    let mut out = Vec::with_capacity(columns.len());
    let mut cursor = 0.0;
    let mut left_offset = 0.0;
    for column in columns {
        let sticky_offset = match column.pin {
            Some(PinSide::Left) => {
                let offset = left_offset;
                left_offset += column.width;
                Some(offset)
            }
            Some(PinSide::Right) | None => None,
        };
        out.push(ColumnLayout {
            column_id: column.id.to_owned(),
            start: cursor,
            width: column.width,
            pin: column.pin,
            sticky_offset,
        });
        cursor += column.width;
    }

    let mut right_offset = 0.0;
    for layout in out.iter_mut().rev() {
        if layout.pin == Some(PinSide::Right) {
            layout.sticky_offset = Some(right_offset);
            right_offset += layout.width;
        }
    }
    out
}

#[must_use]
pub fn total_layout_width(layout: &[ColumnLayout]) -> f64 {
    layout.iter().map(|column| column.width).sum()
}
