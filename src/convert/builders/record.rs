// SPDX-License-Identifier: AGPL-3.0-or-later

//! Builders for operations on whole records and scalar bins.
use crate::convert::coerce;
use crate::convert::error::InvalidOperationError;
use crate::convert::keys;
use crate::operation::Operation;
use crate::plain::PlainFields;
use crate::value::Bin;

fn bin_with(fields: &PlainFields, value_field: &str) -> Result<Bin, InvalidOperationError> {
    let name = coerce::bin_name(fields)?;
    let value = coerce::value(fields, value_field)?;
    Ok(Bin::new(&name, value))
}

pub fn add(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    let name = coerce::bin_name(fields)?;
    let incr = coerce::nullable_value(fields, keys::INCR)?;
    Ok(Operation::Add(Bin::new(&name, incr)))
}

pub fn append(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    Ok(Operation::Append(bin_with(fields, keys::VALUE)?))
}

pub fn prepend(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    Ok(Operation::Prepend(bin_with(fields, keys::VALUE)?))
}

pub fn put(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    Ok(Operation::Put(bin_with(fields, keys::VALUE)?))
}

/// `GET`, reads the whole record when no bin is named.
pub fn get(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    Ok(Operation::Get(coerce::optional_bin_name(fields)?))
}

pub fn read(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    Ok(Operation::Get(Some(coerce::bin_name(fields)?)))
}

pub fn get_header(_fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    Ok(Operation::GetHeader)
}

pub fn touch(_fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    Ok(Operation::Touch)
}

pub fn delete(_fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    Ok(Operation::Delete)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::convert::error::InvalidOperationError;
    use crate::operation::Operation;
    use crate::plain::PlainFields;
    use crate::value::{Bin, Value};

    use super::{add, get, put, read};

    fn fields(json: serde_json::Value) -> PlainFields {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn write_bins() {
        assert_eq!(
            put(&fields(json!({ "bin": "name", "value": "panda" }))),
            Ok(Operation::Put(Bin::new("name", Value::from("panda"))))
        );
        assert_eq!(
            add(&fields(json!({ "bin": "visits", "incr": 2 }))),
            Ok(Operation::Add(Bin::new("visits", Value::Int(2))))
        );
        assert_eq!(
            put(&fields(json!({ "bin": "name", "value": null }))),
            Err(InvalidOperationError::MissingValue("value".into()))
        );
    }

    #[test]
    fn read_bins() {
        assert_eq!(get(&fields(json!({}))), Ok(Operation::Get(None)));
        assert_eq!(
            get(&fields(json!({ "bin": "name" }))),
            Ok(Operation::Get(Some("name".into())))
        );
        assert_eq!(
            read(&fields(json!({ "bin": "name" }))),
            Ok(Operation::Get(Some("name".into())))
        );
    }
}
