// SPDX-License-Identifier: AGPL-3.0-or-later

//! Errors from converting operation requests into typed operations.
use thiserror::Error;

use crate::cdt::error::WireNameError;

/// The request does not describe a valid operation.
///
/// All variants are caused by the input, retrying the same request will fail the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOperationError {
    /// A required field is missing.
    #[error("Missing required key: {0}")]
    MissingKey(String),

    /// A field is not allowed for this operation.
    #[error("Illegal key for operation: {0}")]
    IllegalKey(String),

    /// A field has the wrong type.
    #[error("{field} must be {expected}")]
    InvalidType {
        /// Name of the field.
        field: String,

        /// Description of the expected type.
        expected: &'static str,
    },

    /// A symbolic name is not recognized.
    #[error(transparent)]
    InvalidEnum(#[from] WireNameError),

    /// A write flag of a collection policy is not recognized.
    #[error("Unknown {kind}: {name}")]
    UnknownWriteFlag {
        /// Name of the flags field.
        kind: &'static str,

        /// Unrecognized flag.
        name: String,
    },

    /// An integer does not fit into 32 bits.
    #[error("{0} is too large")]
    TooLarge(String),

    /// A string value can not be parsed as a number.
    #[error("{0} is not numeric")]
    NotNumeric(String),

    /// A binary field is not valid base64.
    #[error("{0} is not valid base64")]
    InvalidBase64(String),

    /// A collection policy is given without an ordering.
    #[error("{0} must contain an entry for \"order\"")]
    MissingPolicyOrder(String),

    /// The operation tag is not one of the recognized tags.
    #[error("invalid operation: {0}")]
    UnknownOperation(String),

    /// A value field is `null`.
    #[error("Missing {0} value")]
    MissingValue(String),
}

impl InvalidOperationError {
    pub(crate) fn invalid_type(field: &str, expected: &'static str) -> Self {
        InvalidOperationError::InvalidType {
            field: field.to_owned(),
            expected,
        }
    }
}
