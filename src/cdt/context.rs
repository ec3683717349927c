// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::cdt::{ListOrder, MapOrder};
use crate::value::Value;

/// One step of an addressing path into nested lists and maps.
#[derive(Clone, Debug, PartialEq)]
pub enum ContextStep {
    /// List item at index.
    ListIndex(i32),

    /// List item at index, creating the list with the given ordering when it does not exist.
    ListIndexCreate {
        /// Index of the item.
        index: i32,

        /// Ordering of a newly created list.
        order: ListOrder,

        /// Pad the list with nil items when the index is out of bounds.
        pad: bool,
    },

    /// List item with value order.
    ListRank(i32),

    /// List item matching the value.
    ListValue(Value),

    /// Map entry at key index.
    MapIndex(i32),

    /// Map entry with value order.
    MapRank(i32),

    /// Map entry with the key.
    MapKey(Value),

    /// Map entry with the key, creating the map with the given ordering when it does not exist.
    MapKeyCreate {
        /// Key of the entry.
        key: Value,

        /// Ordering of a newly created map.
        order: MapOrder,
    },

    /// Map entry matching the value.
    MapValue(Value),
}

/// Non-empty addressing path to a value nested inside a list or map bin.
///
/// Operations without nested addressing carry no context at all, an empty path is never
/// constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Context(Vec<ContextStep>);

impl Context {
    /// Returns a context for the given steps or `None` when there are none.
    pub fn new(steps: Vec<ContextStep>) -> Option<Self> {
        if steps.is_empty() {
            None
        } else {
            Some(Self(steps))
        }
    }

    /// Returns the steps of this path, outermost first.
    pub fn steps(&self) -> &[ContextStep] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;

    use super::{Context, ContextStep};

    #[test]
    fn empty_path_is_no_context() {
        assert_eq!(Context::new(vec![]), None);

        let context = Context::new(vec![
            ContextStep::MapKey(Value::from("scores")),
            ContextStep::ListIndex(-1),
        ])
        .unwrap();
        assert_eq!(context.steps().len(), 2);
        assert_eq!(context.steps()[1], ContextStep::ListIndex(-1));
    }
}
