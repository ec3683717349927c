// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::plain::PlainValue;

/// Generic value wrapper understood by the store.
///
/// Every untyped value which is not coerced into a more specific type (integers for indices,
/// byte blobs for bit operations etc.) ends up as one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Nil value, for example a `null` map key.
    Nil,

    /// Boolean value.
    Bool(bool),

    /// Signed 64-bit integer.
    Int(i64),

    /// Double precision float.
    Float(f64),

    /// UTF-8 string.
    String(String),

    /// Byte blob.
    Blob(Vec<u8>),

    /// Ordered list of values.
    List(Vec<Value>),

    /// Map entries in the order they were given.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Returns the name of the value type for error messages and logs.
    pub fn value_type(&self) -> &str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "str",
            Value::Blob(_) => "blob",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Wraps a plain value, bringing the entries of a map value into a deterministic key order.
    ///
    /// Only the keys of the outermost map are ordered, nested maps keep the order they were
    /// decoded in.
    pub fn normalized(value: &PlainValue) -> Self {
        match value {
            PlainValue::Map(entries) => {
                let mut entries = entries.to_owned();
                entries.sort_by(|(a, _), (b, _)| a.canonical_cmp(b));
                Value::Map(
                    entries
                        .iter()
                        .map(|(key, value)| (Value::from(key), Value::from(value)))
                        .collect(),
                )
            }
            _ => Value::from(value),
        }
    }
}

impl From<&PlainValue> for Value {
    fn from(value: &PlainValue) -> Self {
        match value {
            PlainValue::Null => Value::Nil,
            PlainValue::Boolean(value) => Value::Bool(*value),
            PlainValue::Integer(value) => Value::Int(*value),
            PlainValue::Float(value) => Value::Float(*value),
            PlainValue::String(value) => Value::String(value.to_owned()),
            PlainValue::Bytes(value) => Value::Blob(value.to_owned()),
            PlainValue::Array(values) => Value::List(values.iter().map(Value::from).collect()),
            PlainValue::Map(entries) => Value::Map(
                entries
                    .iter()
                    .map(|(key, value)| (Value::from(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(value)
    }
}

/// Serialized approximate-cardinality sketch, as produced by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HllValue(Vec<u8>);

impl HllValue {
    /// Wraps the raw bytes of a sketch.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of this sketch.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use crate::plain::PlainValue;

    use super::Value;

    #[test]
    fn wrap_plain_values() {
        assert_eq!(Value::from(&PlainValue::Null), Value::Nil);
        assert_eq!(Value::from(&PlainValue::from("a")), Value::from("a"));
        assert_eq!(
            Value::from(&PlainValue::Array(vec![1.into(), PlainValue::Bytes(vec![3])])),
            Value::List(vec![Value::Int(1), Value::Blob(vec![3])])
        );

        // Map entries keep their order
        assert_eq!(
            Value::from(&PlainValue::Map(vec![
                ("b".into(), 1.into()),
                ("a".into(), 2.into())
            ])),
            Value::Map(vec![
                (Value::from("b"), Value::Int(1)),
                (Value::from("a"), Value::Int(2))
            ])
        );
    }

    #[test]
    fn normalize_map_keys() {
        let nested = PlainValue::Map(vec![("y".into(), 1.into()), ("x".into(), 2.into())]);
        let value = PlainValue::Map(vec![
            ("b".into(), nested.clone()),
            ("a".into(), 2.into()),
            (PlainValue::from(3), 3.into()),
        ]);

        assert_eq!(
            Value::normalized(&value),
            Value::Map(vec![
                (Value::Int(3), Value::Int(3)),
                (Value::from("a"), Value::Int(2)),
                (Value::from("b"), Value::from(&nested)),
            ])
        );

        // Anything else is wrapped as is
        assert_eq!(Value::normalized(&PlainValue::from(5)), Value::Int(5));
    }

    #[test]
    fn value_types() {
        assert_eq!(Value::Nil.value_type(), "nil");
        assert_eq!(Value::Blob(vec![]).value_type(), "blob");
        assert_eq!(Value::Map(vec![]).value_type(), "map");
    }
}
