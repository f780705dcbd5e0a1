use super::{GridEngineConfig, grid_model::GridModel, grid_runtime::GridRuntimeState};

/// Internal engine core state used by the public facade (`GridEngine`).
pub(super) struct EngineCore<R> {
    pub(super) config: GridEngineConfig,
    pub(super) model: GridModel<R>,
    pub(super) runtime: GridRuntimeState,
}
