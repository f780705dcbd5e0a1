use crate::extensions::{GridContext, GridEvent};

use super::GridEngine;

impl<R> GridEngine<R> {
    pub(super) fn plugin_context(&self) -> GridContext {
        GridContext {
            state_version: self.core.model.version,
            leaf_count: self.core.model.tree.leaf_slots().len(),
            visible_leaf_count: self.visible_leaf_slots().len(),
            row_count: self.core.model.rows.len(),
            resize_mode: self.core.runtime.resize.mode(),
            resizing_column: self
                .core
                .runtime
                .resize
                .active_column()
                .map(str::to_owned),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: GridEvent) {
        if self.core.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(&event, &context);
        }
    }
}
