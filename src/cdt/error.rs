// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for parsing the symbolic names of store enumerations.
use thiserror::Error;

/// Error from parsing a symbolic name into one of the store enumerations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireNameError {
    /// The given name is not one of the recognized names of this enumeration.
    #[error("invalid {kind}: {name}")]
    UnknownName {
        /// Human-readable name of the enumeration.
        kind: &'static str,

        /// Name which could not be resolved.
        name: String,
    },
}

impl WireNameError {
    pub(crate) fn unknown(kind: &'static str, name: &str) -> Self {
        WireNameError::UnknownName {
            kind,
            name: name.to_owned(),
        }
    }
}
