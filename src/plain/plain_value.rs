// SPDX-License-Identifier: AGPL-3.0-or-later

use std::cmp::Ordering;
use std::convert::TryInto;

use ciborium::Value;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize};

use crate::plain::error::PlainValueError;

/// Field values which have not been checked against an operation schema yet.
///
/// This is what a request looks like right after it left a JSON or binary map decoder: native
/// booleans, numbers, strings, byte sequences, lists and maps, without any knowledge about which
/// field expects which type.
///
/// Latest when the field bag of an operation gets converted, the values are coerced into the
/// concrete types the store expects.
#[derive(Debug, PartialEq, Clone)]
pub enum PlainValue {
    /// Explicit null value.
    Null,

    /// Boolean value.
    Boolean(bool),

    /// Integer value.
    Integer(i64),

    /// Float value.
    Float(f64),

    /// String value.
    String(String),

    /// Byte sequence, only produced by binary map encodings.
    Bytes(Vec<u8>),

    /// Ordered list of values.
    Array(Vec<PlainValue>),

    /// Key/value pairs in the order they were decoded.
    ///
    /// Keys are usually strings but binary map encodings allow any value as a key.
    Map(Vec<(PlainValue, PlainValue)>),
}

impl PlainValue {
    /// Returns the string representation of the type of this plain value.
    ///
    /// This is useful for composing error messages or debug logs.
    pub fn field_type(&self) -> &str {
        match self {
            PlainValue::Null => "null",
            PlainValue::Boolean(_) => "bool",
            PlainValue::Integer(_) => "int",
            PlainValue::Float(_) => "float",
            PlainValue::String(_) => "str",
            PlainValue::Bytes(_) => "bytes",
            PlainValue::Array(_) => "list",
            PlainValue::Map(_) => "map",
        }
    }

    /// Returns true if this is an explicit null value.
    pub fn is_null(&self) -> bool {
        matches!(self, PlainValue::Null)
    }

    /// Returns the inner string when this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlainValue::String(text) => Some(text),
            _ => None,
        }
    }

    /// Total order over plain values, used to bring map keys into a deterministic order.
    ///
    /// Values of different types are ordered by their type first (null, bool, int, float, str,
    /// bytes, list, map), values of the same type by their content.
    pub fn canonical_cmp(&self, other: &PlainValue) -> Ordering {
        match (self, other) {
            (PlainValue::Null, PlainValue::Null) => Ordering::Equal,
            (PlainValue::Boolean(a), PlainValue::Boolean(b)) => a.cmp(b),
            (PlainValue::Integer(a), PlainValue::Integer(b)) => a.cmp(b),
            (PlainValue::Float(a), PlainValue::Float(b)) => a.total_cmp(b),
            (PlainValue::String(a), PlainValue::String(b)) => a.cmp(b),
            (PlainValue::Bytes(a), PlainValue::Bytes(b)) => a.cmp(b),
            (PlainValue::Array(a), PlainValue::Array(b)) => a
                .iter()
                .zip(b.iter())
                .map(|(a, b)| a.canonical_cmp(b))
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            (PlainValue::Map(a), PlainValue::Map(b)) => a
                .iter()
                .zip(b.iter())
                .map(|((key_a, value_a), (key_b, value_b))| {
                    key_a
                        .canonical_cmp(key_b)
                        .then_with(|| value_a.canonical_cmp(value_b))
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            PlainValue::Null => 0,
            PlainValue::Boolean(_) => 1,
            PlainValue::Integer(_) => 2,
            PlainValue::Float(_) => 3,
            PlainValue::String(_) => 4,
            PlainValue::Bytes(_) => 5,
            PlainValue::Array(_) => 6,
            PlainValue::Map(_) => 7,
        }
    }
}

impl Serialize for PlainValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            PlainValue::Null => serializer.serialize_unit(),
            PlainValue::Boolean(value) => serializer.serialize_bool(*value),
            PlainValue::Integer(value) => serializer.serialize_i64(*value),
            PlainValue::Float(value) => serializer.serialize_f64(*value),
            PlainValue::String(value) => serializer.serialize_str(value),
            PlainValue::Bytes(value) => serde_bytes::serialize(value, serializer),
            PlainValue::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            PlainValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PlainValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let cbor_value: Value = Deserialize::deserialize(deserializer)?;

        to_plain_value(cbor_value).map_err(|err| {
            serde::de::Error::custom(format!("error deserializing plain value: {}", err))
        })
    }
}

impl From<bool> for PlainValue {
    fn from(value: bool) -> Self {
        PlainValue::Boolean(value)
    }
}

impl From<i64> for PlainValue {
    fn from(value: i64) -> Self {
        PlainValue::Integer(value)
    }
}

impl From<i32> for PlainValue {
    fn from(value: i32) -> Self {
        PlainValue::Integer(value.into())
    }
}

impl From<f64> for PlainValue {
    fn from(value: f64) -> Self {
        PlainValue::Float(value)
    }
}

impl From<String> for PlainValue {
    fn from(value: String) -> Self {
        PlainValue::String(value)
    }
}

impl From<&str> for PlainValue {
    fn from(value: &str) -> Self {
        PlainValue::String(value.to_owned())
    }
}

impl From<Vec<u8>> for PlainValue {
    fn from(value: Vec<u8>) -> Self {
        PlainValue::Bytes(value)
    }
}

impl From<Vec<PlainValue>> for PlainValue {
    fn from(value: Vec<PlainValue>) -> Self {
        PlainValue::Array(value)
    }
}

impl From<Vec<(PlainValue, PlainValue)>> for PlainValue {
    fn from(value: Vec<(PlainValue, PlainValue)>) -> Self {
        PlainValue::Map(value)
    }
}

/// Helper for converting an encoded value into a plain value.
fn to_plain_value(value: Value) -> Result<PlainValue, PlainValueError> {
    match value {
        Value::Null => Ok(PlainValue::Null),
        Value::Bool(bool) => Ok(bool.into()),
        Value::Integer(int) => {
            let int: i64 = int.try_into()?;
            Ok(int.into())
        }
        Value::Float(float) => Ok(float.into()),
        Value::Text(text) => Ok(text.into()),
        Value::Bytes(bytes) => Ok(bytes.into()),
        // Semantic tags carry no meaning for operation payloads, keep the tagged item
        Value::Tag(_, inner) => to_plain_value(*inner),
        Value::Array(array) => {
            let values: Result<Vec<PlainValue>, PlainValueError> =
                array.into_iter().map(to_plain_value).collect();
            Ok(PlainValue::Array(values?))
        }
        Value::Map(entries) => {
            let entries: Result<Vec<(PlainValue, PlainValue)>, PlainValueError> = entries
                .into_iter()
                .map(|(key, value)| Ok((to_plain_value(key)?, to_plain_value(value)?)))
                .collect();
            Ok(PlainValue::Map(entries?))
        }
        _ => Err(PlainValueError::UnsupportedValue),
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use ciborium::cbor;
    use serde_bytes::ByteBuf;

    use super::PlainValue;

    fn encode(value: ciborium::Value) -> Vec<u8> {
        let mut bytes = Vec::new();
        ciborium::ser::into_writer(&value, &mut bytes).unwrap();
        bytes
    }

    fn decode(bytes: &[u8]) -> Result<PlainValue, ciborium::de::Error<std::io::Error>> {
        ciborium::de::from_reader(bytes)
    }

    #[test]
    fn field_type_representation() {
        assert_eq!("null", PlainValue::Null.field_type());
        assert_eq!("int", PlainValue::Integer(5).field_type());
        assert_eq!("bool", PlainValue::Boolean(false).field_type());
        assert_eq!("bytes", PlainValue::Bytes(vec![1, 2]).field_type());
        assert_eq!("str", PlainValue::String("test".into()).field_type());
        assert_eq!("list", PlainValue::Array(vec![]).field_type());
        assert_eq!("map", PlainValue::Map(vec![]).field_type());
    }

    #[test]
    fn deserialize_human_readable() {
        assert_eq!(
            serde_json::from_str::<PlainValue>("12").unwrap(),
            PlainValue::Integer(12)
        );
        assert_eq!(
            serde_json::from_str::<PlainValue>("12.5").unwrap(),
            PlainValue::Float(12.5)
        );
        assert_eq!(
            serde_json::from_str::<PlainValue>("null").unwrap(),
            PlainValue::Null
        );
        assert_eq!(
            serde_json::from_str::<PlainValue>(r#"[1, "two", true]"#).unwrap(),
            PlainValue::Array(vec![1.into(), "two".into(), true.into()])
        );

        // Map entries keep the order in which they have been decoded
        assert_eq!(
            serde_json::from_str::<PlainValue>(r#"{"b": 1, "a": 2}"#).unwrap(),
            PlainValue::Map(vec![("b".into(), 1.into()), ("a".into(), 2.into())])
        );
    }

    #[test]
    fn deserialize_binary_map_encoding() {
        assert_eq!(
            decode(&encode(cbor!(ByteBuf::from(vec![0, 1, 2])).unwrap())).unwrap(),
            PlainValue::Bytes(vec![0, 1, 2])
        );

        // Binary encodings allow non-string map keys
        assert_eq!(
            decode(&encode(cbor!({ 1 => "one" }).unwrap())).unwrap(),
            PlainValue::Map(vec![(1.into(), "one".into())])
        );
    }

    #[test]
    fn large_numbers() {
        assert_eq!(
            decode(&encode(cbor!(i64::MAX).unwrap())).unwrap(),
            PlainValue::Integer(i64::MAX)
        );

        // It errors when deserializing a too large number
        assert!(decode(&encode(cbor!(u64::MAX).unwrap())).is_err());
        assert!(serde_json::from_str::<PlainValue>("18446744073709551615").is_err());
    }

    #[test]
    fn canonical_ordering() {
        assert_eq!(
            PlainValue::from("a").canonical_cmp(&PlainValue::from("b")),
            Ordering::Less
        );
        assert_eq!(
            PlainValue::from(3).canonical_cmp(&PlainValue::from(3)),
            Ordering::Equal
        );

        // Different types are ordered by type first
        assert_eq!(
            PlainValue::from("a").canonical_cmp(&PlainValue::from(100)),
            Ordering::Greater
        );
        assert_eq!(
            PlainValue::Array(vec![1.into()]).canonical_cmp(&PlainValue::Array(vec![
                1.into(),
                2.into()
            ])),
            Ordering::Less
        );
    }

    #[test]
    fn serialize_to_json() {
        let value = PlainValue::Map(vec![
            ("z".into(), PlainValue::Array(vec![1.into(), PlainValue::Null])),
            ("a".into(), true.into()),
        ]);

        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"z":[1,null],"a":true}"#
        );
    }
}
