// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::value::Value;

/// Named value of a record, used by the basic write operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    /// Name of the bin.
    pub name: String,

    /// Value to write into the bin.
    pub value: Value,
}

impl Bin {
    /// Returns a new bin.
    pub fn new(name: &str, value: Value) -> Self {
        Self {
            name: name.to_owned(),
            value,
        }
    }
}
