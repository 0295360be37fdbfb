//! Host model interface.
//!
//! The widget never owns its data. Line positions and style settings live in a
//! reactive model owned by the host (a notebook kernel on the other end of a
//! comm channel in production, a `HashMap` in tests). [`ModelStore`] is the
//! seam: typed reads with defaults on top of three primitive calls, `get`,
//! `set` and `commit`.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::HashMap;

use serde_json::Value;

/// Model keys read and written by the widget.
pub mod keys {
    pub const VLINE_LEFT: &str = "vline_left";
    pub const VLINE_RIGHT: &str = "vline_right";
    pub const HLINE_UPPER: &str = "hline_upper";
    pub const HLINE_LOWER: &str = "hline_lower";
    pub const MARKER_COLOR: &str = "_marker_color";
    pub const MARKER_SIZE: &str = "_marker_size";
    pub const MARKER_SHAPE: &str = "_marker_shape";
    pub const LINE_WIDTH: &str = "_line_width";
    pub const LINE_COLOR: &str = "_line_color";
    pub const SCALE_FACTOR: &str = "_scale_factor";
    pub const IMAGE_DATA: &str = "_image_data";
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("model key missing: {0}")]
    MissingKey(String),
    #[error("model key {key} has the wrong type: expected {expected}")]
    WrongType { key: String, expected: &'static str },
}

/// A reactive key/value model shared with the host.
///
/// `set` stages a value; `commit` pushes staged values to the host. The widget
/// always calls `commit` right after each `set`.
pub trait ModelStore {
    /// Current value for `key`, or `None` when the host has no value.
    fn get(&self, key: &str) -> Option<Value>;

    /// Stage a new value for `key`.
    fn set(&mut self, key: &str, value: Value);

    /// Push staged changes to the host.
    fn commit(&mut self);

    /// Read a required number.
    ///
    /// # Errors
    ///
    /// `MissingKey` if absent, `WrongType` if not a number.
    fn get_f64(&self, key: &str) -> Result<f64, ModelError> {
        let value = self.get(key).ok_or_else(|| ModelError::MissingKey(key.to_string()))?;
        value.as_f64().ok_or_else(|| ModelError::WrongType { key: key.to_string(), expected: "number" })
    }

    /// Read an optional number, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// `WrongType` if present but not a number.
    fn get_f64_or(&self, key: &str, default: f64) -> Result<f64, ModelError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| ModelError::WrongType { key: key.to_string(), expected: "number" }),
        }
    }

    /// Read an optional string, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// `WrongType` if present but not a string.
    fn get_str_or(&self, key: &str, default: &str) -> Result<String, ModelError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(default.to_string()),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(ModelError::WrongType { key: key.to_string(), expected: "string" }),
        }
    }
}

/// In-memory model. Counts writes and commits so callers can observe sync traffic.
#[derive(Debug, Clone, Default)]
pub struct MemoryModel {
    values: HashMap<String, Value>,
    writes: usize,
    commits: usize,
}

impl MemoryModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert that does not count as a write.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// Number of `set` calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Number of `commit` calls so far.
    #[must_use]
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl ModelStore for MemoryModel {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
    }

    fn commit(&mut self) {
        self.commits += 1;
    }
}
