// SPDX-License-Identifier: AGPL-3.0-or-later

//! Coercion of untyped field values into the types the store expects.
//!
//! Every function reads exactly one field of the bag and never falls back to another field name.
use std::convert::TryFrom;
use std::str::FromStr;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::cdt::error::WireNameError;
use crate::convert::error::InvalidOperationError;
use crate::convert::keys;
use crate::plain::{PlainFields, PlainValue};
use crate::value::{HllValue, Value};

/// Standard alphabet, trailing `=` padding is optional.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

fn require<'a>(fields: &'a PlainFields, name: &str) -> Result<&'a PlainValue, InvalidOperationError> {
    fields
        .get(name)
        .ok_or_else(|| InvalidOperationError::MissingKey(name.to_owned()))
}

/// Returns the name of the bin the operation targets.
pub fn bin_name(fields: &PlainFields) -> Result<String, InvalidOperationError> {
    match require(fields, keys::BIN)? {
        PlainValue::String(name) => Ok(name.to_owned()),
        _ => Err(InvalidOperationError::invalid_type(keys::BIN, "a string")),
    }
}

/// Returns the name of the bin when one is given, `null` counts as absent.
pub fn optional_bin_name(fields: &PlainFields) -> Result<Option<String>, InvalidOperationError> {
    match fields.get(keys::BIN) {
        None | Some(PlainValue::Null) => Ok(None),
        Some(_) => bin_name(fields).map(Some),
    }
}

/// Returns an integer field narrowed to 32 bits.
pub fn int(fields: &PlainFields, name: &str) -> Result<i32, InvalidOperationError> {
    match require(fields, name)? {
        PlainValue::Integer(value) => {
            i32::try_from(*value).map_err(|_| InvalidOperationError::TooLarge(name.to_owned()))
        }
        _ => Err(InvalidOperationError::invalid_type(name, "an integer")),
    }
}

/// Returns an integer field narrowed to 32 bits, or `None` when it is absent.
pub fn optional_int(fields: &PlainFields, name: &str) -> Result<Option<i32>, InvalidOperationError> {
    if fields.contains(name) {
        int(fields, name).map(Some)
    } else {
        Ok(None)
    }
}

/// Returns a 64-bit integer field. Strings holding a base-10 integer are accepted as well.
pub fn long(fields: &PlainFields, name: &str) -> Result<i64, InvalidOperationError> {
    match require(fields, name)? {
        PlainValue::Integer(value) => Ok(*value),
        PlainValue::String(text) => text
            .parse::<i64>()
            .map_err(|_| InvalidOperationError::NotNumeric(name.to_owned())),
        _ => Err(InvalidOperationError::NotNumeric(name.to_owned())),
    }
}

/// Returns a boolean field, `false` when it is absent.
///
/// Strings are accepted as well: exactly `"true"` is true, any other string is false.
pub fn boolean(fields: &PlainFields, name: &str) -> Result<bool, InvalidOperationError> {
    match fields.get(name) {
        None => Ok(false),
        Some(PlainValue::Boolean(value)) => Ok(*value),
        Some(PlainValue::String(text)) => Ok(text == "true"),
        Some(_) => Err(InvalidOperationError::invalid_type(name, "a boolean value")),
    }
}

fn decode_base64(name: &str, value: &PlainValue) -> Result<Vec<u8>, InvalidOperationError> {
    match value {
        PlainValue::String(text) => BASE64
            .decode(text)
            .map_err(|_| InvalidOperationError::InvalidBase64(name.to_owned())),
        _ => Err(InvalidOperationError::invalid_type(name, "a base64 encoded string")),
    }
}

/// Returns a binary field, given as base64 encoded string.
pub fn bytes(fields: &PlainFields, name: &str) -> Result<Vec<u8>, InvalidOperationError> {
    decode_base64(name, require(fields, name)?)
}

/// Returns a generic value field which must not be `null`.
pub fn value(fields: &PlainFields, name: &str) -> Result<Value, InvalidOperationError> {
    match fields.get(name) {
        None | Some(PlainValue::Null) => Err(InvalidOperationError::MissingValue(name.to_owned())),
        Some(value) => Ok(Value::from(value)),
    }
}

/// Returns a generic value field, passing `null` through as nil.
pub fn nullable_value(fields: &PlainFields, name: &str) -> Result<Value, InvalidOperationError> {
    require(fields, name).map(Value::from)
}

/// Returns a generic value field, or `None` when it is absent or `null`.
///
/// Used for the bounds of range selectors where `None` means unbounded.
pub fn optional_value(fields: &PlainFields, name: &str) -> Option<Value> {
    match fields.get(name) {
        None | Some(PlainValue::Null) => None,
        Some(value) => Some(Value::from(value)),
    }
}

fn list<'a>(fields: &'a PlainFields, name: &str) -> Result<&'a [PlainValue], InvalidOperationError> {
    match require(fields, name)? {
        PlainValue::Array(items) => Ok(items),
        _ => Err(InvalidOperationError::invalid_type(name, "a list")),
    }
}

/// Returns a list of generic values. Items which are maps get their keys ordered.
pub fn value_list(fields: &PlainFields, name: &str) -> Result<Vec<Value>, InvalidOperationError> {
    Ok(list(fields, name)?.iter().map(Value::normalized).collect())
}

/// Returns a list of generic values as given.
pub fn plain_list(fields: &PlainFields, name: &str) -> Result<Vec<Value>, InvalidOperationError> {
    Ok(list(fields, name)?.iter().map(Value::from).collect())
}

/// Returns the entries of a map field in the order they were given.
pub fn map_entries(
    fields: &PlainFields,
    name: &str,
) -> Result<Vec<(Value, Value)>, InvalidOperationError> {
    match require(fields, name)? {
        PlainValue::Map(entries) => Ok(entries
            .iter()
            .map(|(key, value)| (Value::from(key), Value::from(value)))
            .collect()),
        _ => Err(InvalidOperationError::invalid_type(name, "a map")),
    }
}

/// Returns a list of sketches, each given as base64 encoded string.
pub fn hll_values(fields: &PlainFields, name: &str) -> Result<Vec<HllValue>, InvalidOperationError> {
    list(fields, name)?
        .iter()
        .map(|item| decode_base64(name, item).map(HllValue::new))
        .collect()
}

/// Returns a field holding one of the symbolic names of a store enumeration.
pub fn symbol<T>(fields: &PlainFields, name: &str) -> Result<T, InvalidOperationError>
where
    T: FromStr<Err = WireNameError>,
{
    match require(fields, name)? {
        PlainValue::String(text) => Ok(text.parse::<T>()?),
        _ => Err(InvalidOperationError::invalid_type(name, "a string")),
    }
}

/// Returns a symbolic field, or `None` when it is absent or `null`.
pub fn optional_symbol<T>(fields: &PlainFields, name: &str) -> Result<Option<T>, InvalidOperationError>
where
    T: FromStr<Err = WireNameError>,
{
    match fields.get(name) {
        None | Some(PlainValue::Null) => Ok(None),
        Some(_) => symbol(fields, name).map(Some),
    }
}
