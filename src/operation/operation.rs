// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::cdt::Context;
use crate::operation::{BitOperation, HllOperation, ListOperation, MapOperation};
use crate::value::Bin;

/// Fully resolved, store-ready operation.
///
/// Every value in here has been checked against the schema of the operation tag it was built
/// from. List and map operations address the collection stored in `bin`, or a collection nested
/// in it when a context is given.
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    /// Adds an integer to a bin.
    Add(Bin),

    /// Appends a string to a bin.
    Append(Bin),

    /// Prepends a string to a bin.
    Prepend(Bin),

    /// Writes a bin.
    Put(Bin),

    /// Reads a single bin, or the whole record when no bin is named.
    Get(Option<String>),

    /// Reads the record metadata.
    GetHeader,

    /// Resets the time-to-live of the record.
    Touch,

    /// Deletes the record.
    Delete,

    /// List operation.
    List {
        /// Bin holding the list.
        bin: String,
        /// Path to a nested list.
        context: Option<Context>,
        /// The operation.
        op: ListOperation,
    },

    /// Map operation.
    Map {
        /// Bin holding the map.
        bin: String,
        /// Path to a nested map.
        context: Option<Context>,
        /// The operation.
        op: MapOperation,
    },

    /// Bit operation, always using the default bit policy.
    Bit {
        /// Bin holding the blob.
        bin: String,
        /// The operation.
        op: BitOperation,
    },

    /// Approximate-cardinality operation, always using the default sketch policy.
    Hll {
        /// Bin holding the sketch.
        bin: String,
        /// The operation.
        op: HllOperation,
    },
}

impl Operation {
    /// Returns the name of the bin this operation targets, if any.
    pub fn bin_name(&self) -> Option<&str> {
        match self {
            Operation::Add(bin)
            | Operation::Append(bin)
            | Operation::Prepend(bin)
            | Operation::Put(bin) => Some(&bin.name),
            Operation::Get(bin) => bin.as_deref(),
            Operation::GetHeader | Operation::Touch | Operation::Delete => None,
            Operation::List { bin, .. }
            | Operation::Map { bin, .. }
            | Operation::Bit { bin, .. }
            | Operation::Hll { bin, .. } => Some(bin),
        }
    }

    /// Returns the addressing path of a list or map operation.
    pub fn context(&self) -> Option<&Context> {
        match self {
            Operation::List { context, .. } | Operation::Map { context, .. } => context.as_ref(),
            _ => None,
        }
    }
}
