// SPDX-License-Identifier: AGPL-3.0-or-later

//! Assembly of list and map write policies from their nested field bag.
use std::convert::TryFrom;

use crate::cdt::{ListOrder, ListPolicy, MapOrder, MapPolicy, MapWriteMode};
use crate::convert::coerce;
use crate::convert::error::InvalidOperationError;
use crate::convert::flags;
use crate::convert::keys;
use crate::plain::{PlainFields, PlainValue};

/// Returns the nested policy bag, `None` when the field is absent or `null`.
fn policy_fields(
    fields: &PlainFields,
    name: &str,
) -> Result<Option<PlainFields>, InvalidOperationError> {
    match fields.get(name) {
        None | Some(PlainValue::Null) => Ok(None),
        Some(value) => PlainFields::try_from(value)
            .map(Some)
            .map_err(|_| InvalidOperationError::invalid_type(name, "a map")),
    }
}

/// Returns the `listPolicy` of an operation, the default policy when none is given.
///
/// A given policy needs an `order` and may carry `writeFlags`. Other fields in the policy are
/// ignored.
pub fn list_policy(fields: &PlainFields) -> Result<ListPolicy, InvalidOperationError> {
    let policy = match policy_fields(fields, keys::LIST_POLICY)? {
        Some(policy) => policy,
        None => return Ok(ListPolicy::default()),
    };

    if !policy.contains(keys::ORDER) {
        return Err(InvalidOperationError::MissingPolicyOrder(
            keys::LIST_POLICY.to_owned(),
        ));
    }

    let order: ListOrder = coerce::symbol(&policy, keys::ORDER)?;
    let flags = flags::list_write_flags(&policy)?;

    Ok(ListPolicy::new(order, flags))
}

/// Returns the `mapPolicy` of an operation, the default policy when none is given.
///
/// A given policy needs an `order`. Its write semantics come from `writeFlags` when present,
/// otherwise from `writeMode` which defaults to `UPDATE`.
pub fn map_policy(fields: &PlainFields) -> Result<MapPolicy, InvalidOperationError> {
    let policy = match policy_fields(fields, keys::MAP_POLICY)? {
        Some(policy) => policy,
        None => return Ok(MapPolicy::default()),
    };

    if !policy.contains(keys::ORDER) {
        return Err(InvalidOperationError::MissingPolicyOrder(
            keys::MAP_POLICY.to_owned(),
        ));
    }

    let order: MapOrder = coerce::symbol(&policy, keys::ORDER)?;

    if policy.contains(keys::WRITE_FLAGS) {
        let flags = flags::map_write_flags(&policy)?;
        return Ok(MapPolicy::with_flags(order, flags));
    }

    let mode: MapWriteMode =
        coerce::optional_symbol(&policy, keys::WRITE_MODE)?.unwrap_or_default();

    Ok(MapPolicy::with_mode(order, mode))
}
