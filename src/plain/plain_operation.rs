// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use serde::de::Visitor;
use serde::{Deserialize, Serialize};

use crate::plain::error::PlainFieldsError;
use crate::plain::{PlainFields, PlainValue};

/// Name of the envelope field holding the operation tag.
pub const OPERATION_FIELD: &str = "operation";

/// Name of the envelope field holding the field bag.
pub const OP_VALUES_FIELD: &str = "opValues";

/// Operation envelope as it arrives from a decoder, `{ operation: <tag>, opValues: <field bag> }`.
///
/// The envelope is kept as an unchecked field bag: which top-level fields are present and whether
/// they have the right type is only checked when converting it into an `OperationRequest`, so that
/// structural problems surface as operation errors and not as decoding errors.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct PlainOperation(PlainFields);

impl PlainOperation {
    /// Returns an envelope for the given operation tag and field bag.
    ///
    /// Fails when a field name occurs more than once in the bag.
    pub fn new(tag: &str, op_values: Vec<(&str, PlainValue)>) -> Result<Self, PlainFieldsError> {
        let mut checked = PlainFields::new();
        for (name, value) in op_values {
            checked.insert(name, value)?;
        }

        let entries = checked
            .iter()
            .map(|(name, value)| (PlainValue::from(name.as_str()), value.to_owned()))
            .collect::<Vec<(PlainValue, PlainValue)>>();

        let mut fields = PlainFields::new();
        fields.insert(OPERATION_FIELD, PlainValue::from(tag))?;
        fields.insert(OP_VALUES_FIELD, PlainValue::Map(entries))?;

        Ok(Self(fields))
    }

    /// Returns a top-level field of the envelope.
    pub fn get(&self, name: &str) -> Option<&PlainValue> {
        self.0.get(name)
    }

    /// Returns all top-level fields of the envelope.
    pub fn fields(&self) -> &PlainFields {
        &self.0
    }
}

impl From<PlainFields> for PlainOperation {
    fn from(fields: PlainFields) -> Self {
        Self(fields)
    }
}

impl<'de> Deserialize<'de> for PlainOperation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PlainOperationVisitor;

        impl<'de> Visitor<'de> for PlainOperationVisitor {
            type Value = PlainOperation;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("operation envelope")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut fields = PlainFields::new();

                while let Some(name) = map.next_key::<String>()? {
                    let value: PlainValue = map.next_value()?;
                    fields.insert(&name, value).map_err(|_| {
                        serde::de::Error::custom(format!(
                            "encountered duplicate envelope field '{}'",
                            name
                        ))
                    })?;
                }

                Ok(PlainOperation(fields))
            }
        }

        deserializer.deserialize_map(PlainOperationVisitor)
    }
}

#[cfg(test)]
mod tests {
    use ciborium::cbor;

    use crate::plain::error::PlainFieldsError;
    use crate::plain::PlainValue;

    use super::PlainOperation;

    #[test]
    fn deserialize_json_envelope() {
        let envelope: PlainOperation = serde_json::from_str(
            r#"{ "operation": "LIST_SIZE", "opValues": { "bin": "cards" } }"#,
        )
        .unwrap();

        assert_eq!(
            envelope,
            PlainOperation::new("LIST_SIZE", vec![("bin", "cards".into())]).unwrap()
        );
        assert_eq!(envelope.fields().len(), 2);
    }

    #[test]
    fn duplicate_op_values() {
        assert_eq!(
            PlainOperation::new("LIST_SIZE", vec![("bin", "a".into()), ("bin", "b".into())]),
            Err(PlainFieldsError::FieldDuplicate("bin".into()))
        );
    }

    #[test]
    fn deserialize_binary_envelope() {
        let mut bytes = Vec::new();
        let value = cbor!({
            "operation" => "BIT_GET",
            "opValues" => { "bin" => "bits", "bitOffset" => 0, "bitSize" => 8 },
        })
        .unwrap();
        ciborium::ser::into_writer(&value, &mut bytes).unwrap();

        let envelope: PlainOperation = ciborium::de::from_reader(&bytes[..]).unwrap();
        assert_eq!(envelope.get("operation"), Some(&PlainValue::from("BIT_GET")));
    }

    #[test]
    fn unchecked_envelope_fields() {
        // Unknown or missing top-level fields are not a decoding error
        let envelope: PlainOperation =
            serde_json::from_str(r#"{ "operation": "TOUCH", "extra": 1 }"#).unwrap();
        assert_eq!(envelope.get("opValues"), None);
        assert_eq!(envelope.get("extra"), Some(&PlainValue::from(1)));

        // Duplicate top-level fields are
        assert!(serde_json::from_str::<PlainOperation>(
            r#"{ "operation": "TOUCH", "operation": "DELETE" }"#
        )
        .is_err());

        // And so is anything which is not a map
        assert!(serde_json::from_str::<PlainOperation>(r#"["TOUCH", {}]"#).is_err());
    }
}
