//! Value kinds and coercion at the format boundary.

use crate::error::StashError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Expected shape of a configuration value.
///
/// A declared kind is advisory: lookups that cannot honor it fall back to the
/// raw stored value, and default writes that cannot honor it are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    Array,
    Table,
}

impl ValueKind {
    /// The kind a value already has, if any (`null` has none).
    pub fn of(value: &Value) -> Option<ValueKind> {
        match value {
            Value::String(_) => Some(ValueKind::String),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(ValueKind::Integer),
            Value::Number(_) => Some(ValueKind::Float),
            Value::Bool(_) => Some(ValueKind::Boolean),
            Value::Array(_) => Some(ValueKind::Array),
            Value::Object(_) => Some(ValueKind::Table),
            Value::Null => None,
        }
    }
}

/// Coerce `value` to `kind`.
///
/// Scalar coercions are lenient: numeric strings parse to numbers, scalars
/// render to strings, integers widen to floats. Composite kinds must match
/// exactly.
pub fn coerce(value: &Value, kind: ValueKind) -> Result<Value, StashError> {
    let coerced = match kind {
        ValueKind::String => match value {
            Value::String(_) => Some(value.clone()),
            Value::Number(n) => Some(Value::String(n.to_string())),
            Value::Bool(b) => Some(Value::String(b.to_string())),
            _ => None,
        },
        ValueKind::Integer => match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(value.clone()),
            Value::Number(n) => n
                .as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| Value::from(f as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok().map(Value::from),
            _ => None,
        },
        ValueKind::Float => match value {
            Value::Number(n) => n.as_f64().map(Value::from),
            Value::String(s) => s.trim().parse::<f64>().ok().map(Value::from),
            _ => None,
        },
        ValueKind::Boolean => match value {
            Value::Bool(_) => Some(value.clone()),
            Value::String(s) => match s.trim() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            _ => None,
        },
        ValueKind::Array => match value {
            Value::Array(_) => Some(value.clone()),
            _ => None,
        },
        ValueKind::Table => match value {
            Value::Object(_) => Some(value.clone()),
            _ => None,
        },
    };

    coerced.ok_or_else(|| StashError::TypeCoercion {
        kind,
        value: value.clone(),
    })
}
