// SPDX-License-Identifier: AGPL-3.0-or-later

//! Composition of return types and write flags from their symbolic names.
use crate::cdt::{
    BitOverflowAction, ListReturnType, ListSortFlags, ListWriteFlags, MapReturnType,
    MapWriteFlags, ReturnType,
};
use crate::convert::coerce;
use crate::convert::error::InvalidOperationError;
use crate::convert::keys;
use crate::plain::{PlainFields, PlainValue};

/// Returns the list return type, with the inversion bit set when `inverted` is true.
pub fn list_return_type(fields: &PlainFields) -> Result<ReturnType, InvalidOperationError> {
    let inverted = coerce::boolean(fields, keys::INVERTED)?;
    let base: ListReturnType = coerce::symbol(fields, keys::LIST_RETURN_TYPE)?;
    Ok(ReturnType::new(base.code(), inverted))
}

/// Returns the map return type, with the inversion bit set when `inverted` is true.
pub fn map_return_type(fields: &PlainFields) -> Result<ReturnType, InvalidOperationError> {
    let inverted = coerce::boolean(fields, keys::INVERTED)?;
    let base: MapReturnType = coerce::symbol(fields, keys::MAP_RETURN_TYPE)?;
    Ok(ReturnType::new(base.code(), inverted))
}

fn flag_names<'a>(fields: &'a PlainFields) -> Result<Vec<&'a str>, InvalidOperationError> {
    let not_a_list = || InvalidOperationError::invalid_type(keys::WRITE_FLAGS, "a list of strings");

    match fields.get(keys::WRITE_FLAGS) {
        None => Ok(Vec::new()),
        Some(PlainValue::Array(items)) => items
            .iter()
            .map(|item| item.as_str().ok_or_else(not_a_list))
            .collect(),
        Some(_) => Err(not_a_list()),
    }
}

/// Combines the `writeFlags` of a list policy into a bitmask, no flags give the default.
pub fn list_write_flags(policy: &PlainFields) -> Result<i32, InvalidOperationError> {
    let mut flags = 0;

    for name in flag_names(policy)? {
        let flag: ListWriteFlags = name
            .parse()
            .map_err(|_| InvalidOperationError::UnknownWriteFlag {
                kind: "listWriteFlags",
                name: name.to_owned(),
            })?;
        flags |= flag.code();
    }

    Ok(flags)
}

/// Combines the `writeFlags` of a map policy into a bitmask, no flags give the default.
pub fn map_write_flags(policy: &PlainFields) -> Result<i32, InvalidOperationError> {
    let mut flags = 0;

    for name in flag_names(policy)? {
        let flag: MapWriteFlags = name
            .parse()
            .map_err(|_| InvalidOperationError::UnknownWriteFlag {
                kind: "mapWriteFlags",
                name: name.to_owned(),
            })?;
        flags |= flag.code();
    }

    Ok(flags)
}

/// Returns the sort flags of a list sort operation, the default when absent.
pub fn sort_flags(fields: &PlainFields) -> Result<ListSortFlags, InvalidOperationError> {
    Ok(coerce::optional_symbol(fields, keys::LIST_SORT_FLAGS)?.unwrap_or_default())
}

/// Returns the overflow action of an arithmetic bit operation, `FAIL` when absent.
///
/// Unlike all other symbolic names the action is matched ignoring its case.
pub fn overflow_action(fields: &PlainFields) -> Result<BitOverflowAction, InvalidOperationError> {
    match fields.get(keys::BIT_OVERFLOW_ACTION) {
        None => Ok(BitOverflowAction::default()),
        Some(PlainValue::String(name)) => Ok(BitOverflowAction::parse_ignore_case(name)?),
        Some(_) => Err(InvalidOperationError::invalid_type(
            keys::BIT_OVERFLOW_ACTION,
            "a string",
        )),
    }
}
