//! Source values from `serde_json` documents.

use serde_json::Value;

use crate::SourceValue;

impl From<&Value> for SourceValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => SourceValue::Bool(*b),
            Value::String(s) => SourceValue::String(s.clone()),
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    SourceValue::I64(v)
                } else if let Some(v) = n.as_u64() {
                    SourceValue::U64(v)
                } else {
                    // Every non-integer number has an f64 form without
                    // arbitrary_precision.
                    SourceValue::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::Null => SourceValue::Unrecognized("null"),
            Value::Array(_) => SourceValue::Unrecognized("array"),
            Value::Object(_) => SourceValue::Unrecognized("object"),
        }
    }
}

impl From<Value> for SourceValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => SourceValue::String(s),
            other => SourceValue::from(&other),
        }
    }
}
