// SPDX-License-Identifier: AGPL-3.0-or-later

//! Builders for map operations.
use crate::cdt::{MapOrder, ReturnType};
use crate::convert::context::build_context;
use crate::convert::error::InvalidOperationError;
use crate::convert::keys;
use crate::convert::{coerce, flags, policy};
use crate::operation::{MapOperation, MapSelector, Operation};
use crate::plain::PlainFields;

/// Builds a map selector from the fields of a read or remove-by operation.
pub type SelectFn = fn(&PlainFields) -> Result<MapSelector, InvalidOperationError>;

fn map_op<F>(fields: &PlainFields, build: F) -> Result<Operation, InvalidOperationError>
where
    F: FnOnce(&PlainFields) -> Result<MapOperation, InvalidOperationError>,
{
    let bin = coerce::bin_name(fields)?;
    let op = build(fields)?;
    let context = build_context(fields)?;

    Ok(Operation::Map { bin, context, op })
}

pub fn by_index(fields: &PlainFields) -> Result<MapSelector, InvalidOperationError> {
    Ok(MapSelector::Index(coerce::int(fields, keys::INDEX)?))
}

pub fn by_index_range(fields: &PlainFields) -> Result<MapSelector, InvalidOperationError> {
    Ok(MapSelector::IndexRange {
        index: coerce::int(fields, keys::INDEX)?,
        count: coerce::optional_int(fields, keys::COUNT)?,
    })
}

pub fn by_key(fields: &PlainFields) -> Result<MapSelector, InvalidOperationError> {
    Ok(MapSelector::Key(coerce::nullable_value(fields, keys::KEY)?))
}

pub fn by_key_list(fields: &PlainFields) -> Result<MapSelector, InvalidOperationError> {
    Ok(MapSelector::KeyList(coerce::plain_list(fields, keys::KEYS)?))
}

pub fn by_key_range(fields: &PlainFields) -> Result<MapSelector, InvalidOperationError> {
    Ok(MapSelector::KeyRange {
        begin: coerce::optional_value(fields, keys::KEY_BEGIN),
        end: coerce::optional_value(fields, keys::KEY_END),
    })
}

pub fn by_rank(fields: &PlainFields) -> Result<MapSelector, InvalidOperationError> {
    Ok(MapSelector::Rank(coerce::int(fields, keys::RANK)?))
}

pub fn by_rank_range(fields: &PlainFields) -> Result<MapSelector, InvalidOperationError> {
    Ok(MapSelector::RankRange {
        rank: coerce::int(fields, keys::RANK)?,
        count: coerce::optional_int(fields, keys::COUNT)?,
    })
}

pub fn by_value(fields: &PlainFields) -> Result<MapSelector, InvalidOperationError> {
    Ok(MapSelector::Value(coerce::value(fields, keys::VALUE)?))
}

pub fn by_value_range(fields: &PlainFields) -> Result<MapSelector, InvalidOperationError> {
    Ok(MapSelector::ValueRange {
        begin: coerce::optional_value(fields, keys::VALUE_BEGIN),
        end: coerce::optional_value(fields, keys::VALUE_END),
    })
}

pub fn by_value_list(fields: &PlainFields) -> Result<MapSelector, InvalidOperationError> {
    Ok(MapSelector::ValueList(coerce::value_list(fields, keys::VALUES)?))
}

/// The anchor key of the range is given in `value`.
pub fn by_key_rel_index_range(fields: &PlainFields) -> Result<MapSelector, InvalidOperationError> {
    Ok(MapSelector::KeyRelativeIndexRange {
        key: coerce::value(fields, keys::VALUE)?,
        index: coerce::int(fields, keys::INDEX)?,
        count: coerce::optional_int(fields, keys::COUNT)?,
    })
}

pub fn by_value_rel_rank_range(fields: &PlainFields) -> Result<MapSelector, InvalidOperationError> {
    Ok(MapSelector::ValueRelativeRankRange {
        value: coerce::value(fields, keys::VALUE)?,
        rank: coerce::int(fields, keys::RANK)?,
        count: coerce::optional_int(fields, keys::COUNT)?,
    })
}

fn selection(
    fields: &PlainFields,
    select: SelectFn,
) -> Result<(MapSelector, ReturnType), InvalidOperationError> {
    let selector = select(fields)?;
    let return_type = flags::map_return_type(fields)?;
    Ok((selector, return_type))
}

/// Read operations selecting entries by index, key, rank or value.
pub fn get_by(fields: &PlainFields, select: SelectFn) -> Result<Operation, InvalidOperationError> {
    map_op(fields, |fields| {
        let (selector, return_type) = selection(fields, select)?;
        Ok(MapOperation::GetBy(selector, return_type))
    })
}

/// Remove operations selecting entries by index, key, rank or value.
pub fn remove_by(
    fields: &PlainFields,
    select: SelectFn,
) -> Result<Operation, InvalidOperationError> {
    map_op(fields, |fields| {
        let (selector, return_type) = selection(fields, select)?;
        Ok(MapOperation::RemoveBy(selector, return_type))
    })
}

pub fn clear(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    map_op(fields, |_| Ok(MapOperation::Clear))
}

pub fn decrement(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    map_op(fields, |fields| {
        Ok(MapOperation::Decrement {
            key: coerce::nullable_value(fields, keys::KEY)?,
            decr: coerce::nullable_value(fields, keys::DECR)?,
            policy: policy::map_policy(fields)?,
        })
    })
}

pub fn increment(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    map_op(fields, |fields| {
        Ok(MapOperation::Increment {
            key: coerce::nullable_value(fields, keys::KEY)?,
            incr: coerce::nullable_value(fields, keys::INCR)?,
            policy: policy::map_policy(fields)?,
        })
    })
}

pub fn put(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    map_op(fields, |fields| {
        Ok(MapOperation::Put {
            key: coerce::nullable_value(fields, keys::KEY)?,
            value: coerce::value(fields, keys::VALUE)?,
            policy: policy::map_policy(fields)?,
        })
    })
}

pub fn put_items(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    map_op(fields, |fields| {
        Ok(MapOperation::PutItems {
            items: coerce::map_entries(fields, keys::MAP)?,
            policy: policy::map_policy(fields)?,
        })
    })
}

pub fn set_policy(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    map_op(fields, |fields| {
        Ok(MapOperation::SetPolicy(policy::map_policy(fields)?))
    })
}

pub fn size(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    map_op(fields, |_| Ok(MapOperation::Size))
}

pub fn create(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    map_op(fields, |fields| {
        let order: MapOrder = coerce::symbol(fields, keys::MAP_ORDER)?;
        Ok(MapOperation::Create(order))
    })
}
