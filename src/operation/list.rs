// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::cdt::{ListOrder, ListPolicy, ListSortFlags, ReturnType};
use crate::value::Value;

/// Selects the items of a list bin a read or remove operation applies to.
#[derive(Clone, Debug, PartialEq)]
pub enum ListSelector {
    /// Item at index.
    Index(i32),

    /// `count` items starting at index, all remaining items when no count is given.
    IndexRange {
        /// First index.
        index: i32,
        /// Number of items.
        count: Option<i32>,
    },

    /// Item with value order.
    Rank(i32),

    /// `count` items starting at rank, all remaining items when no count is given.
    RankRange {
        /// First rank.
        rank: i32,
        /// Number of items.
        count: Option<i32>,
    },

    /// Items equal to the value.
    Value(Value),

    /// Items in the value range `[begin, end)`, an absent bound is unbounded.
    ValueRange {
        /// Inclusive lower bound.
        begin: Option<Value>,
        /// Exclusive upper bound.
        end: Option<Value>,
    },

    /// Items equal to any of the values.
    ValueList(Vec<Value>),

    /// Items nearest to the value and greater, by relative rank.
    ValueRelativeRankRange {
        /// Anchor value.
        value: Value,
        /// Rank relative to the anchor.
        rank: i32,
        /// Number of items.
        count: Option<i32>,
    },
}

/// Operation on a list bin.
#[derive(Clone, Debug, PartialEq)]
pub enum ListOperation {
    /// Appends a value.
    Append(Value),

    /// Appends several values.
    AppendItems {
        /// Values to append.
        values: Vec<Value>,
        /// Write policy.
        policy: ListPolicy,
    },

    /// Removes all items.
    Clear,

    /// Returns the item at index.
    Get(i32),

    /// Returns `count` items starting at index.
    GetRange {
        /// First index.
        index: i32,
        /// Number of items, all remaining items when absent.
        count: Option<i32>,
    },

    /// Returns the selected items.
    GetBy(ListSelector, ReturnType),

    /// Increments the item at index by `incr`, by one when absent.
    Increment {
        /// Index of the item.
        index: i32,
        /// Increment.
        incr: Option<Value>,
        /// Write policy.
        policy: ListPolicy,
    },

    /// Inserts a value at index.
    Insert {
        /// Insert position.
        index: i32,
        /// Value to insert.
        value: Value,
        /// Write policy.
        policy: ListPolicy,
    },

    /// Inserts several values at index.
    InsertItems {
        /// Insert position.
        index: i32,
        /// Values to insert.
        values: Vec<Value>,
        /// Write policy.
        policy: ListPolicy,
    },

    /// Removes and returns the item at index.
    Pop(i32),

    /// Removes and returns `count` items starting at index.
    PopRange {
        /// First index.
        index: i32,
        /// Number of items, all remaining items when absent.
        count: Option<i32>,
    },

    /// Removes the item at index.
    Remove(i32),

    /// Removes `count` items starting at index.
    RemoveRange {
        /// First index.
        index: i32,
        /// Number of items, all remaining items when absent.
        count: Option<i32>,
    },

    /// Removes the selected items.
    RemoveBy(ListSelector, ReturnType),

    /// Overwrites the item at index.
    Set {
        /// Index of the item.
        index: i32,
        /// New value.
        value: Value,
        /// Write policy.
        policy: ListPolicy,
    },

    /// Changes the ordering of the list.
    SetOrder(ListOrder),

    /// Returns the number of items.
    Size,

    /// Sorts the list.
    Sort(ListSortFlags),

    /// Removes all items outside of `count` items starting at index.
    Trim {
        /// First index to keep.
        index: i32,
        /// Number of items to keep.
        count: i32,
    },

    /// Creates the list at the addressed position.
    Create {
        /// Ordering of the new list.
        order: ListOrder,
        /// Pad with nil items when the context index is out of bounds.
        pad: bool,
    },
}
