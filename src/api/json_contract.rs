use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

use super::{GridEngine, GridState};

pub const GRID_STATE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridStateJsonContractV1 {
    pub schema_version: u32,
    pub state: GridState,
}

impl GridState {
    pub fn to_json_pretty(&self) -> GridResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GridError::InvalidData(format!("failed to serialize grid state: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> GridResult<String> {
        let payload = GridStateJsonContractV1 {
            schema_version: GRID_STATE_JSON_SCHEMA_V1,
            state: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GridError::InvalidData(format!("failed to serialize grid state contract v1: {e}"))
        })
    }

    /// Parses either a bare state object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> GridResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            GridError::InvalidData(format!("failed to parse grid state json payload: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                GridError::InvalidData(format!("failed to parse grid state: {e}"))
            });
        }
        let payload: GridStateJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            GridError::InvalidData(format!("failed to parse grid state contract: {e}"))
        })?;
        if payload.schema_version != GRID_STATE_JSON_SCHEMA_V1 {
            return Err(GridError::InvalidData(format!(
                "unsupported grid state schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.state)
    }
}

impl<R> GridEngine<R> {
    pub fn state_json_pretty(&self) -> GridResult<String> {
        self.state().to_json_pretty()
    }

    pub fn state_json_contract_v1_pretty(&self) -> GridResult<String> {
        self.state().to_json_contract_v1_pretty()
    }

    /// Parses and restores persisted state (bare or contract form).
    pub fn restore_state_json(&mut self, input: &str) -> GridResult<()> {
        let state = GridState::from_json_compat_str(input)?;
        self.restore_state(state)
    }
}
