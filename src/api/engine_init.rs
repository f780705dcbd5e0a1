use tracing::debug;

use crate::core::{ColumnDef, ColumnTree};
use crate::error::GridResult;

use super::validation::{default_state, resolve_state, validate_engine_config};
use super::{
    GridEngine, GridEngineConfig, GridStatePatch, engine_core::EngineCore, grid_model::GridModel,
    grid_runtime::GridRuntimeState,
};

impl<R> GridEngine<R> {
    /// Creates an engine with [`GridEngineConfig::default`].
    ///
    /// Fails with [`crate::GridError::Configuration`] when the column tree is
    /// malformed (duplicate ids, leaf without accessor, empty group).
    pub fn new(
        columns: Vec<ColumnDef<R>>,
        rows: Vec<R>,
        initial_state: Option<GridStatePatch>,
    ) -> GridResult<Self> {
        Self::with_config(GridEngineConfig::default(), columns, rows, initial_state)
    }

    pub fn with_config(
        config: GridEngineConfig,
        columns: Vec<ColumnDef<R>>,
        rows: Vec<R>,
        initial_state: Option<GridStatePatch>,
    ) -> GridResult<Self> {
        let config = validate_engine_config(config)?;
        let tree = ColumnTree::build(columns, config.column_defaults())?;
        let defaults = default_state(&tree);
        let state = match initial_state {
            Some(patch) => resolve_state(&tree, config, patch, &defaults)?,
            None => defaults,
        };
        debug!(
            columns = tree.len(),
            leaves = tree.leaf_slots().len(),
            rows = rows.len(),
            "grid engine created"
        );

        Ok(Self {
            core: EngineCore {
                config,
                model: GridModel::new(tree, rows, state),
                runtime: GridRuntimeState::default(),
            },
        })
    }
}
