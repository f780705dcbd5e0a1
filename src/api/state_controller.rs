use tracing::debug;

use crate::error::GridResult;
use crate::extensions::GridEvent;

use super::validation::{default_state, resolve_state};
use super::{GridEngine, GridState, GridStatePatch};

impl<R> GridEngine<R> {
    /// Owned copy of the committed state, for persistence.
    #[must_use]
    pub fn snapshot_state(&self) -> GridState {
        self.core.model.state.clone()
    }

    /// Replaces the committed state, validated like a construction-time
    /// initial state. On error nothing changes.
    pub fn restore_state(&mut self, state: GridState) -> GridResult<()> {
        self.apply_state_patch(GridStatePatch::from(state))
    }

    /// Applies a partial state on top of defaults; `None` fields reset.
    pub fn apply_state_patch(&mut self, patch: GridStatePatch) -> GridResult<()> {
        let tree = &self.core.model.tree;
        let defaults = default_state(tree);
        let resolved = resolve_state(tree, self.core.config, patch, &defaults)?;
        let version = self.core.model.commit_state(resolved);
        let active = self.core.runtime.resize.active_column().map(str::to_owned);
        if let Some(active) = active {
            if let Some(width) = self.core.model.state.width_of(&active) {
                self.core.runtime.resize.rebase(&active, width);
            }
        }
        debug!(version, "restored grid state");
        self.emit_plugin_event(GridEvent::StateRestored);
        Ok(())
    }
}
