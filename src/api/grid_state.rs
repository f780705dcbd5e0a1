use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::PinSide;

/// Committed grid state: plain key/value data, serializable verbatim.
///
/// `visibility` only records hidden columns (absent means visible) and
/// `pinning` only records pinned ones, so equal grids compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GridState {
    #[serde(default)]
    pub visibility: IndexMap<String, bool>,
    #[serde(default)]
    pub order: Vec<String>,
    #[serde(default)]
    pub pinning: IndexMap<String, PinSide>,
    #[serde(default)]
    pub widths: IndexMap<String, f64>,
}

impl GridState {
    #[must_use]
    pub fn is_visible(&self, column_id: &str) -> bool {
        self.visibility.get(column_id).copied().unwrap_or(true)
    }

    #[must_use]
    pub fn pin_of(&self, column_id: &str) -> Option<PinSide> {
        self.pinning.get(column_id).copied()
    }

    #[must_use]
    pub fn width_of(&self, column_id: &str) -> Option<f64> {
        self.widths.get(column_id).copied()
    }
}

/// Partial state accepted at construction; `None` fields keep defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GridStatePatch {
    #[serde(default)]
    pub visibility: Option<IndexMap<String, bool>>,
    #[serde(default)]
    pub order: Option<Vec<String>>,
    #[serde(default)]
    pub pinning: Option<IndexMap<String, PinSide>>,
    #[serde(default)]
    pub widths: Option<IndexMap<String, f64>>,
}

impl GridStatePatch {
    #[must_use]
    pub fn with_visibility(mut self, visibility: IndexMap<String, bool>) -> Self {
        self.visibility = Some(visibility);
        self
    }

    #[must_use]
    pub fn with_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_pinning(mut self, pinning: IndexMap<String, PinSide>) -> Self {
        self.pinning = Some(pinning);
        self
    }

    #[must_use]
    pub fn with_widths(mut self, widths: IndexMap<String, f64>) -> Self {
        self.widths = Some(widths);
        self
    }
}

impl From<GridState> for GridStatePatch {
    fn from(state: GridState) -> Self {
        Self {
            visibility: Some(state.visibility),
            order: Some(state.order),
            pinning: Some(state.pinning),
            widths: Some(state.widths),
        }
    }
}
