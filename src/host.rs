//! Binding of [`ModelStore`] to the JS model object handed in by the host.
//!
//! The host model exposes `get(key)`, `set(key, value)` and `save_changes()`.
//! Values cross the boundary as plain JS numbers, strings and booleans; they
//! are carried as `serde_json::Value` on the Rust side.

use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::model::ModelStore;

#[wasm_bindgen]
extern "C" {
    /// Reactive model object owned by the notebook front end.
    #[derive(Debug, Clone)]
    pub type HostModel;

    #[wasm_bindgen(method, js_name = get)]
    fn get_value(this: &HostModel, key: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = set)]
    fn set_value(this: &HostModel, key: &str, value: &JsValue);

    #[wasm_bindgen(method)]
    fn save_changes(this: &HostModel);
}

/// [`ModelStore`] backed by a [`HostModel`].
#[derive(Debug, Clone)]
pub struct JsModel {
    inner: HostModel,
}

impl JsModel {
    #[must_use]
    pub fn new(inner: HostModel) -> Self {
        Self { inner }
    }
}

impl ModelStore for JsModel {
    fn get(&self, key: &str) -> Option<Value> {
        js_to_json(&self.inner.get_value(key))
    }

    fn set(&mut self, key: &str, value: Value) {
        self.inner.set_value(key, &json_to_js(&value));
    }

    fn commit(&mut self) {
        self.inner.save_changes();
    }
}

fn js_to_json(value: &JsValue) -> Option<Value> {
    if let Some(n) = value.as_f64() {
        serde_json::Number::from_f64(n).map(Value::Number)
    } else if let Some(s) = value.as_string() {
        Some(Value::String(s))
    } else {
        value.as_bool().map(Value::Bool)
    }
}

fn json_to_js(value: &Value) -> JsValue {
    match value {
        Value::Null => JsValue::NULL,
        Value::Bool(b) => JsValue::from_bool(*b),
        Value::Number(n) => n.as_f64().map_or(JsValue::NULL, JsValue::from_f64),
        Value::String(s) => JsValue::from_str(s),
        other => JsValue::from_str(&other.to_string()),
    }
}
