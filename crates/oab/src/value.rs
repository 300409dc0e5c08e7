//! [`Value`] — the tagged union the codec encodes and decodes.

/// A JSON-like value as carried by the OAB wire format.
///
/// The integer domain is abstractly arbitrary-precision: signed magnitudes
/// live in [`Integer`](Value::Integer), and positive magnitudes above
/// `i64::MAX` in [`UInteger`](Value::UInteger), so no value is silently
/// truncated on either side of the wire.
///
/// Objects are insertion-ordered `(key, value)` pairs; the order is
/// significant for re-encoding but not for semantic equality.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null.
    Null,
    /// Undefined. Not representable in JSON; maps to null on conversion.
    Undefined,
    /// Boolean value.
    Bool(bool),
    /// Signed integer fitting a machine word.
    Integer(i64),
    /// Unsigned integer above `i64::MAX`.
    UInteger(u64),
    /// IEEE-754 floating-point number.
    Float(f64),
    /// Sequence of Unicode scalar values.
    Str(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Ordered key-value pairs, keys unique.
    Object(Vec<(String, Value)>),
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInteger(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Object(
                obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Undefined => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Integer(i) => serde_json::json!(i),
            Value::UInteger(u) => serde_json::json!(u),
            Value::Float(f) => serde_json::json!(f),
            Value::Str(s) => serde_json::Value::String(s),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
