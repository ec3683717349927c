// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for decoding plain values, field bags and operation envelopes.
use thiserror::Error;

/// Errors from converting decoded data into `PlainValue`.
#[derive(Error, Debug)]
#[allow(missing_copy_implementations)]
pub enum PlainValueError {
    /// Integers need to fit into a signed 64-bit number.
    #[error(transparent)]
    IntegerOutOfRange(#[from] std::num::TryFromIntError),

    /// Encountered a value type which is not supported in operation payloads.
    #[error("unsupported value type")]
    UnsupportedValue,
}

/// Errors from methods of `PlainFields`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlainFieldsError {
    /// Detected duplicate field when adding a new one.
    #[error("field '{0}' already exists")]
    FieldDuplicate(String),

    /// Field bags can only be built from map values.
    #[error("expected map, found {0}")]
    NotAMap(String),

    /// Field names need to be strings.
    #[error("field names must be strings, found {0}")]
    InvalidFieldName(String),
}
