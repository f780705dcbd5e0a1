mod column_queries;
mod data_controller;
mod derived_cache;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod grid_model;
mod grid_runtime;
mod grid_state;
mod json_contract;
mod order_controller;
mod pinning_controller;
mod plugin_dispatch;
mod plugin_registry;
mod resize_controller;
mod row_projection;
mod state_controller;
mod validation;
mod visibility_controller;

pub use derived_cache::DerivedCacheStats;
pub use engine::GridEngine;
pub use engine_config::{DEFAULT_COLUMN_WIDTH, DEFAULT_MIN_COLUMN_WIDTH, GridEngineConfig};
pub use grid_state::{GridState, GridStatePatch};
pub use json_contract::{GRID_STATE_JSON_SCHEMA_V1, GridStateJsonContractV1};
