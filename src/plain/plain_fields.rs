// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::btree_map::{Iter, Keys};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;

use serde::de::Visitor;
use serde::{Deserialize, Serialize};

use crate::plain::error::PlainFieldsError;
use crate::plain::PlainValue;

/// Name of a field inside a field bag.
pub type FieldName = String;

/// Field bag of an operation which has not been checked against an operation schema yet.
///
/// Field names are unique, their order carries no meaning.
#[derive(Clone, Serialize, Default, Debug, PartialEq)]
pub struct PlainFields(BTreeMap<FieldName, PlainValue>);

impl PlainFields {
    /// Returns a new, empty field bag.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns true when no field is given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Gets a field from the bag by name, returns `None` if it couldn't be found.
    pub fn get(&self, name: &str) -> Option<&PlainValue> {
        self.0.get(name)
    }

    /// Returns true if a field with this name exists, regardless of its value.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Inserts a new field into the bag.
    ///
    /// Returns an error when a duplicate field name was detected.
    pub fn insert(&mut self, name: &str, value: PlainValue) -> Result<(), PlainFieldsError> {
        if self.0.contains_key(name) {
            Err(PlainFieldsError::FieldDuplicate(name.to_owned()))
        } else {
            self.0.insert(name.to_owned(), value);
            Ok(())
        }
    }

    /// Iterates over all fields.
    pub fn iter(&self) -> Iter<'_, FieldName, PlainValue> {
        self.0.iter()
    }

    /// Iterates over all field names.
    pub fn names(&self) -> Keys<'_, FieldName, PlainValue> {
        self.0.keys()
    }
}

impl<'de> Deserialize<'de> for PlainFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PlainFieldsVisitor;

        impl<'de> Visitor<'de> for PlainFieldsVisitor {
            type Value = PlainFields;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("map of operation fields")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut fields = PlainFields::new();

                while let Some(field_name) = map.next_key::<String>()? {
                    let field_value: PlainValue = map.next_value()?;
                    fields.insert(&field_name, field_value).map_err(|_| {
                        serde::de::Error::custom(format!(
                            "encountered duplicate field key '{}'",
                            field_name
                        ))
                    })?;
                }

                Ok(fields)
            }
        }

        deserializer.deserialize_map(PlainFieldsVisitor)
    }
}

impl TryFrom<&PlainValue> for PlainFields {
    type Error = PlainFieldsError;

    /// Interprets a decoded map value as a field bag.
    fn try_from(value: &PlainValue) -> Result<Self, Self::Error> {
        let entries = match value {
            PlainValue::Map(entries) => entries,
            _ => return Err(PlainFieldsError::NotAMap(value.field_type().to_owned())),
        };

        let mut fields = PlainFields::new();

        for (name, value) in entries {
            let name = name
                .as_str()
                .ok_or_else(|| PlainFieldsError::InvalidFieldName(name.field_type().to_owned()))?;
            fields.insert(name, value.to_owned())?;
        }

        Ok(fields)
    }
}

/// Builds a field bag from a list of named values.
///
/// Only available for tests, panics when a field name occurs twice.
#[cfg(any(test, feature = "test-utils"))]
impl From<Vec<(&str, PlainValue)>> for PlainFields {
    fn from(fields_list: Vec<(&str, PlainValue)>) -> Self {
        let mut fields = PlainFields::new();

        for (name, value) in fields_list {
            fields.insert(name, value).unwrap();
        }

        fields
    }
}
