use crate::extensions::GridPlugin;
use crate::interaction::ResizeInteractionState;

use super::derived_cache::DerivedCache;

/// Runtime orchestration state grouped separately from the grid model.
#[derive(Default)]
pub(super) struct GridRuntimeState {
    pub(super) resize: ResizeInteractionState,
    pub(super) cache: DerivedCache,
    pub(super) plugins: Vec<Box<dyn GridPlugin>>,
}
