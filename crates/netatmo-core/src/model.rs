//! Station / module / measurement model.
//!
//! Upstream measurement values arrive as untyped JSON. They are kept as
//! [`MeasurementValue`] until the flattening step decodes them.

use serde_json::Value;

use crate::error::{ExporterError, Result};

/// A physical weather-station device and the modules it reports.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: String,
    pub name: String,
    /// Upstream order. The main device comes first, then its linked modules.
    pub modules: Vec<Module>,
}

/// A sensor unit attached to a station.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub id: String,
    pub name: String,
    pub data: Vec<(String, MeasurementValue)>,
}

impl Module {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data: Vec::new(),
        }
    }

    /// Append a measurement (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MeasurementValue>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }
}

/// Measurement value of dynamic origin.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementValue(pub Value);

impl MeasurementValue {
    /// Decode to `f64`. Only JSON numbers are accepted; strings, booleans,
    /// null and containers are rejected.
    pub fn decode(&self, key: &str) -> Result<f64> {
        match &self.0 {
            Value::Number(n) => n.as_f64().ok_or_else(|| ExporterError::Measurement {
                key: key.to_string(),
                reason: format!("number {n} not representable as f64"),
            }),
            other => Err(ExporterError::Measurement {
                key: key.to_string(),
                reason: format!("expected number, got {}", type_name(other)),
            }),
        }
    }
}

impl From<Value> for MeasurementValue {
    fn from(v: Value) -> Self {
        Self(v)
    }
}

impl From<f64> for MeasurementValue {
    fn from(v: f64) -> Self {
        Self(Value::from(v))
    }
}

impl From<i64> for MeasurementValue {
    fn from(v: i64) -> Self {
        Self(Value::from(v))
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_integers_and_floats() {
        assert_eq!(MeasurementValue(json!(21.5)).decode("t").ok(), Some(21.5));
        assert_eq!(MeasurementValue(json!(1012)).decode("p").ok(), Some(1012.0));
        assert_eq!(MeasurementValue(json!(-3)).decode("t").ok(), Some(-3.0));
    }

    #[test]
    fn rejects_non_numeric() {
        for v in [json!("21.5"), json!(null), json!(true), json!([1]), json!({"a": 1})] {
            let err = MeasurementValue(v).decode("temperature").unwrap_err();
            assert_eq!(err.kind().as_str(), "MEASUREMENT");
        }
    }
}
