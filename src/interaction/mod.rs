use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// How resize deltas reach committed column widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeMode {
    /// Every delta updates the committed width immediately.
    #[default]
    Live,
    /// Deltas accumulate in the gesture buffer and flush when the gesture ends.
    OnCommit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeInteractionMode {
    Idle,
    Dragging,
}

/// In-flight resize gesture; its buffer lives outside committed grid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeGesture {
    pub column_id: String,
    /// Committed width when the gesture started or was last rebased.
    pub start_width: f64,
    /// Sum of on-commit deltas received so far.
    pub pending_delta: f64,
}

impl ResizeGesture {
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_delta != 0.0
    }
}

/// Two-state resize machine: `Idle -> Dragging { column } -> Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResizeInteractionState {
    gesture: Option<ResizeGesture>,
}

impl ResizeInteractionState {
    #[must_use]
    pub fn mode(&self) -> ResizeInteractionMode {
        if self.gesture.is_some() {
            ResizeInteractionMode::Dragging
        } else {
            ResizeInteractionMode::Idle
        }
    }

    #[must_use]
    pub fn gesture(&self) -> Option<&ResizeGesture> {
        self.gesture.as_ref()
    }

    #[must_use]
    pub fn active_column(&self) -> Option<&str> {
        self.gesture.as_ref().map(|gesture| gesture.column_id.as_str())
    }

    #[must_use]
    pub fn is_dragging(&self, column_id: &str) -> bool {
        self.active_column() == Some(column_id)
    }

    /// Fails when another column owns the gesture.
    pub fn ensure_available_for(&self, column_id: &str) -> GridResult<()> {
        match self.active_column() {
            Some(active) if active != column_id => Err(GridError::ConcurrentResize {
                active: active.to_owned(),
                requested: column_id.to_owned(),
            }),
            _ => Ok(()),
        }
    }

    /// Enters `Dragging`. Returns `false` when the same column was already dragging.
    pub fn on_resize_start(&mut self, column_id: &str, start_width: f64) -> GridResult<bool> {
        self.ensure_available_for(column_id)?;
        if self.gesture.is_some() {
            return Ok(false);
        }
        self.gesture = Some(ResizeGesture {
            column_id: column_id.to_owned(),
            start_width,
            pending_delta: 0.0,
        });
        Ok(true)
    }

    /// Buffers an on-commit delta. Returns the gesture after accumulation.
    pub fn accumulate(&mut self, column_id: &str, delta: f64) -> GridResult<&ResizeGesture> {
        self.ensure_available_for(column_id)?;
        match self.gesture.as_mut() {
            Some(gesture) => {
                gesture.pending_delta += delta;
                Ok(gesture)
            }
            None => Err(GridError::InvalidData(format!(
                "no resize gesture in progress for column `{column_id}`"
            ))),
        }
    }

    /// Moves the gesture baseline after the committed width changed underneath it.
    pub fn rebase(&mut self, column_id: &str, committed_width: f64) {
        if let Some(gesture) = self.gesture.as_mut() {
            if gesture.column_id == column_id {
                gesture.start_width = committed_width;
            }
        }
    }

    /// Leaves `Dragging` and hands back the finished gesture.
    pub fn on_resize_end(&mut self) -> Option<ResizeGesture> {
        self.gesture.take()
    }
}
