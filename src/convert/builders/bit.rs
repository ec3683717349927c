// SPDX-License-Identifier: AGPL-3.0-or-later

//! Builders for bit operations on byte blob bins.
//!
//! Bit operations always use the default bit policy and do not take an addressing path.
use crate::convert::error::InvalidOperationError;
use crate::convert::keys;
use crate::convert::{coerce, flags};
use crate::operation::{BitOperation, Operation};
use crate::plain::PlainFields;

fn bit_op<F>(fields: &PlainFields, build: F) -> Result<Operation, InvalidOperationError>
where
    F: FnOnce(&PlainFields) -> Result<BitOperation, InvalidOperationError>,
{
    let bin = coerce::bin_name(fields)?;
    let op = build(fields)?;

    Ok(Operation::Bit { bin, op })
}

/// Offset and size of the addressed bit range.
fn range(fields: &PlainFields) -> Result<(i32, i32), InvalidOperationError> {
    Ok((
        coerce::int(fields, keys::BIT_OFFSET)?,
        coerce::int(fields, keys::BIT_SIZE)?,
    ))
}

pub fn resize(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        Ok(BitOperation::Resize {
            byte_size: coerce::int(fields, keys::BYTE_SIZE)?,
            resize_flags: coerce::int(fields, keys::RESIZE_FLAGS)?,
        })
    })
}

pub fn insert(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        Ok(BitOperation::Insert {
            byte_offset: coerce::int(fields, keys::BYTE_OFFSET)?,
            value: coerce::bytes(fields, keys::VALUE)?,
        })
    })
}

pub fn remove(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        Ok(BitOperation::Remove {
            byte_offset: coerce::int(fields, keys::BYTE_OFFSET)?,
            byte_size: coerce::int(fields, keys::BYTE_SIZE)?,
        })
    })
}

pub fn set(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        let value = coerce::bytes(fields, keys::VALUE)?;
        Ok(BitOperation::Set {
            bit_offset,
            bit_size,
            value,
        })
    })
}

pub fn or(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        let value = coerce::bytes(fields, keys::VALUE)?;
        Ok(BitOperation::Or {
            bit_offset,
            bit_size,
            value,
        })
    })
}

pub fn xor(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        let value = coerce::bytes(fields, keys::VALUE)?;
        Ok(BitOperation::Xor {
            bit_offset,
            bit_size,
            value,
        })
    })
}

pub fn and(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        let value = coerce::bytes(fields, keys::VALUE)?;
        Ok(BitOperation::And {
            bit_offset,
            bit_size,
            value,
        })
    })
}

pub fn not(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        Ok(BitOperation::Not {
            bit_offset,
            bit_size,
        })
    })
}

pub fn lshift(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        let shift = coerce::int(fields, keys::SHIFT)?;
        Ok(BitOperation::Lshift {
            bit_offset,
            bit_size,
            shift,
        })
    })
}

pub fn rshift(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        let shift = coerce::int(fields, keys::SHIFT)?;
        Ok(BitOperation::Rshift {
            bit_offset,
            bit_size,
            shift,
        })
    })
}

/// `BIT_ADD`, `signed` defaults to false and the overflow action to `FAIL`.
pub fn add(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        Ok(BitOperation::Add {
            bit_offset,
            bit_size,
            value: coerce::long(fields, keys::VALUE)?,
            signed: coerce::boolean(fields, keys::SIGNED)?,
            action: flags::overflow_action(fields)?,
        })
    })
}

pub fn subtract(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        Ok(BitOperation::Subtract {
            bit_offset,
            bit_size,
            value: coerce::long(fields, keys::VALUE)?,
            signed: coerce::boolean(fields, keys::SIGNED)?,
            action: flags::overflow_action(fields)?,
        })
    })
}

pub fn set_int(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        Ok(BitOperation::SetInt {
            bit_offset,
            bit_size,
            value: coerce::long(fields, keys::VALUE)?,
        })
    })
}

pub fn get(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        Ok(BitOperation::Get {
            bit_offset,
            bit_size,
        })
    })
}

pub fn count(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        Ok(BitOperation::Count {
            bit_offset,
            bit_size,
        })
    })
}

/// `BIT_LSCAN`, searches for set bits when `value` is true, for unset bits otherwise.
pub fn lscan(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        Ok(BitOperation::Lscan {
            bit_offset,
            bit_size,
            value: coerce::boolean(fields, keys::VALUE)?,
        })
    })
}

pub fn rscan(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        Ok(BitOperation::Rscan {
            bit_offset,
            bit_size,
            value: coerce::boolean(fields, keys::VALUE)?,
        })
    })
}

pub fn get_int(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    bit_op(fields, |fields| {
        let (bit_offset, bit_size) = range(fields)?;
        Ok(BitOperation::GetInt {
            bit_offset,
            bit_size,
            signed: coerce::boolean(fields, keys::SIGNED)?,
        })
    })
}
