// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::cdt::{MapOrder, MapPolicy, ReturnType};
use crate::value::Value;

/// Selects the entries of a map bin a read or remove operation applies to.
#[derive(Clone, Debug, PartialEq)]
pub enum MapSelector {
    /// Entry at key index.
    Index(i32),

    /// `count` entries starting at key index, all remaining entries when no count is given.
    IndexRange {
        /// First index.
        index: i32,
        /// Number of entries.
        count: Option<i32>,
    },

    /// Entry with the key.
    Key(Value),

    /// Entries with any of the keys.
    KeyList(Vec<Value>),

    /// Entries in the key range `[begin, end)`, an absent bound is unbounded.
    KeyRange {
        /// Inclusive lower bound.
        begin: Option<Value>,
        /// Exclusive upper bound.
        end: Option<Value>,
    },

    /// Entry with value order.
    Rank(i32),

    /// `count` entries starting at rank, all remaining entries when no count is given.
    RankRange {
        /// First rank.
        rank: i32,
        /// Number of entries.
        count: Option<i32>,
    },

    /// Entries with the value.
    Value(Value),

    /// Entries in the value range `[begin, end)`, an absent bound is unbounded.
    ValueRange {
        /// Inclusive lower bound.
        begin: Option<Value>,
        /// Exclusive upper bound.
        end: Option<Value>,
    },

    /// Entries with any of the values.
    ValueList(Vec<Value>),

    /// Entries nearest to the key and greater, by relative key index.
    KeyRelativeIndexRange {
        /// Anchor key.
        key: Value,
        /// Index relative to the anchor.
        index: i32,
        /// Number of entries.
        count: Option<i32>,
    },

    /// Entries nearest to the value and greater, by relative rank.
    ValueRelativeRankRange {
        /// Anchor value.
        value: Value,
        /// Rank relative to the anchor.
        rank: i32,
        /// Number of entries.
        count: Option<i32>,
    },
}

/// Operation on a map bin.
#[derive(Clone, Debug, PartialEq)]
pub enum MapOperation {
    /// Removes all entries.
    Clear,

    /// Decrements the value of an entry.
    Decrement {
        /// Key of the entry.
        key: Value,
        /// Decrement.
        decr: Value,
        /// Write policy.
        policy: MapPolicy,
    },

    /// Returns the selected entries.
    GetBy(MapSelector, ReturnType),

    /// Increments the value of an entry.
    Increment {
        /// Key of the entry.
        key: Value,
        /// Increment.
        incr: Value,
        /// Write policy.
        policy: MapPolicy,
    },

    /// Writes an entry.
    Put {
        /// Key of the entry.
        key: Value,
        /// Value of the entry.
        value: Value,
        /// Write policy.
        policy: MapPolicy,
    },

    /// Writes several entries.
    PutItems {
        /// Entries to write.
        items: Vec<(Value, Value)>,
        /// Write policy.
        policy: MapPolicy,
    },

    /// Removes the selected entries.
    RemoveBy(MapSelector, ReturnType),

    /// Changes the policy of the map.
    SetPolicy(MapPolicy),

    /// Returns the number of entries.
    Size,

    /// Creates the map at the addressed position.
    Create(MapOrder),
}
