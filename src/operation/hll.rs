// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::value::{HllValue, Value};

/// Bit count the store reads as "keep the value of the existing sketch".
pub const UNSET_BIT_COUNT: i32 = -1;

/// Operation on an approximate-cardinality sketch bin.
#[derive(Clone, Debug, PartialEq)]
pub enum HllOperation {
    /// Creates a new, empty sketch.
    Init {
        /// Number of index bits.
        index_bit_count: i32,
        /// Number of min hash bits, `UNSET_BIT_COUNT` when not given.
        min_hash_bit_count: i32,
    },

    /// Adds values to the sketch, creating it when it does not exist.
    Add {
        /// Values to add.
        values: Vec<Value>,
        /// Number of index bits, `UNSET_BIT_COUNT` when not given.
        index_bit_count: i32,
        /// Number of min hash bits, `UNSET_BIT_COUNT` when not given.
        min_hash_bit_count: i32,
    },

    /// Writes the union of the sketch and the given sketches.
    SetUnion(Vec<HllValue>),

    /// Updates the cached estimate and returns it.
    RefreshCount,

    /// Folds the sketch down to fewer index bits.
    Fold(i32),

    /// Returns the estimated number of elements.
    GetCount,

    /// Returns the union of the sketch and the given sketches.
    GetUnion(Vec<HllValue>),

    /// Returns the estimated size of the union with the given sketches.
    GetUnionCount(Vec<HllValue>),

    /// Returns the estimated size of the intersection with the given sketches.
    GetIntersectCount(Vec<HllValue>),

    /// Returns the estimated similarity with the given sketches.
    GetSimilarity(Vec<HllValue>),

    /// Returns the index and min hash bit counts.
    Describe,
}
