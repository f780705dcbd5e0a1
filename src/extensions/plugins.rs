use serde::{Deserialize, Serialize};

use crate::core::PinSide;
use crate::interaction::{ResizeInteractionMode, ResizeMode};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridContext {
    pub state_version: u64,
    pub leaf_count: usize,
    pub visible_leaf_count: usize,
    pub row_count: usize,
    pub resize_mode: ResizeInteractionMode,
    pub resizing_column: Option<String>,
}

/// Event stream exposed to plugins. Emitted after a command fully applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GridEvent {
    VisibilityChanged {
        column_ids: Vec<String>,
        visible: bool,
    },
    OrderChanged {
        order: Vec<String>,
    },
    PinningChanged {
        column_ids: Vec<String>,
        side: Option<PinSide>,
    },
    ResizeStarted {
        column_id: String,
    },
    ColumnResized {
        column_id: String,
        width: f64,
        mode: ResizeMode,
    },
    ResizeEnded {
        column_id: String,
        committed: bool,
    },
    WidthsReset {
        column_ids: Vec<String>,
    },
    RowsReplaced {
        row_count: usize,
    },
    StateRestored,
}

/// Observer hook interface.
///
/// Plugins see events and a context snapshot; they never get a mutable
/// handle into engine state.
pub trait GridPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &GridEvent, context: &GridContext);
}
