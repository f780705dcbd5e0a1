use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value produced by a column accessor for one row.
///
/// `Empty` doubles as the substitute for accessors that fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Empty,
            serde_json::Value::Bool(flag) => Self::Bool(*flag),
            serde_json::Value::Number(number) => {
                number.as_f64().map_or(Self::Empty, Self::Number)
            }
            serde_json::Value::String(text) => Self::Text(text.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Edge a column is fixed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinSide {
    Left,
    Right,
}

/// Horizontal section of the visible column set used by split layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnRegion {
    Left,
    Center,
    Right,
}

impl ColumnRegion {
    #[must_use]
    pub const fn from_pin(pin: Option<PinSide>) -> Self {
        match pin {
            Some(PinSide::Left) => Self::Left,
            Some(PinSide::Right) => Self::Right,
            None => Self::Center,
        }
    }
}

/// Row contract used by key accessors.
///
/// Rows only read through function accessors can rely on the default,
/// which reports every key as absent.
pub trait GridRow {
    fn field(&self, _key: &str) -> Option<CellValue> {
        None
    }
}

impl GridRow for serde_json::Value {
    fn field(&self, key: &str) -> Option<CellValue> {
        self.get(key).map(CellValue::from)
    }
}

impl GridRow for serde_json::Map<String, serde_json::Value> {
    fn field(&self, key: &str) -> Option<CellValue> {
        self.get(key).map(CellValue::from)
    }
}

impl GridRow for IndexMap<String, CellValue> {
    fn field(&self, key: &str) -> Option<CellValue> {
        self.get(key).cloned()
    }
}

impl GridRow for HashMap<String, CellValue> {
    fn field(&self, key: &str) -> Option<CellValue> {
        self.get(key).cloned()
    }
}
