use serde::{Deserialize, Serialize};

use crate::core::ColumnDefaults;
use crate::error::{GridError, GridResult};

pub const DEFAULT_COLUMN_WIDTH: f64 = 150.0;
pub const DEFAULT_MIN_COLUMN_WIDTH: f64 = 40.0;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist grid setup alongside
/// [`super::GridState`] without inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridEngineConfig {
    #[serde(default = "default_column_width")]
    pub default_column_width: f64,
    #[serde(default = "default_min_column_width")]
    pub min_column_width: f64,
    /// `None` leaves widths unbounded above.
    #[serde(default)]
    pub max_column_width: Option<f64>,
    #[serde(default = "default_enabled")]
    pub enable_column_resizing: bool,
    #[serde(default = "default_enabled")]
    pub enable_pinning: bool,
    #[serde(default = "default_enabled")]
    pub enable_hiding: bool,
}

impl Default for GridEngineConfig {
    fn default() -> Self {
        Self {
            default_column_width: DEFAULT_COLUMN_WIDTH,
            min_column_width: DEFAULT_MIN_COLUMN_WIDTH,
            max_column_width: None,
            enable_column_resizing: true,
            enable_pinning: true,
            enable_hiding: true,
        }
    }
}

impl GridEngineConfig {
    #[must_use]
    pub fn with_default_column_width(mut self, width: f64) -> Self {
        self.default_column_width = width;
        self
    }

    #[must_use]
    pub fn with_width_bounds(mut self, min_width: f64, max_width: Option<f64>) -> Self {
        self.min_column_width = min_width;
        self.max_column_width = max_width;
        self
    }

    #[must_use]
    pub fn with_column_resizing(mut self, enabled: bool) -> Self {
        self.enable_column_resizing = enabled;
        self
    }

    #[must_use]
    pub fn with_pinning(mut self, enabled: bool) -> Self {
        self.enable_pinning = enabled;
        self
    }

    #[must_use]
    pub fn with_hiding(mut self, enabled: bool) -> Self {
        self.enable_hiding = enabled;
        self
    }

    #[must_use]
    pub fn column_defaults(self) -> ColumnDefaults {
        ColumnDefaults {
            width: self.default_column_width,
            min_width: self.min_column_width,
            max_width: self.max_column_width.unwrap_or(f64::INFINITY),
        }
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> GridResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| GridError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> GridResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GridError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_column_width() -> f64 {
    DEFAULT_COLUMN_WIDTH
}

fn default_min_column_width() -> f64 {
    DEFAULT_MIN_COLUMN_WIDTH
}

fn default_enabled() -> bool {
    true
}
