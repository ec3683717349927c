// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::cdt::error::WireNameError;

wire_enum! {
    /// Ordering of a list bin.
    pub enum ListOrder {
        /// Items keep their insertion order.
        Unordered = "UNORDERED",

        /// Items are kept sorted by value.
        Ordered = "ORDERED",
    }
    unknown(name) => WireNameError::unknown("list order", name);
}

impl ListOrder {
    /// Returns the numeric code the store uses for this ordering.
    pub fn code(&self) -> i32 {
        match self {
            ListOrder::Unordered => 0,
            ListOrder::Ordered => 1,
        }
    }
}

impl Default for ListOrder {
    fn default() -> Self {
        ListOrder::Unordered
    }
}

wire_enum! {
    /// Ordering of a map bin.
    pub enum MapOrder {
        /// Entries are not ordered.
        Unordered = "UNORDERED",

        /// Entries are kept sorted by key.
        KeyOrdered = "KEY_ORDERED",

        /// Entries are kept sorted by key and indexed by value.
        KeyValueOrdered = "KEY_VALUE_ORDERED",
    }
    unknown(name) => WireNameError::unknown("map order", name);
}

impl MapOrder {
    /// Returns the numeric code the store uses for this ordering.
    pub fn code(&self) -> i32 {
        match self {
            MapOrder::Unordered => 0,
            MapOrder::KeyOrdered => 1,
            MapOrder::KeyValueOrdered => 3,
        }
    }
}

impl Default for MapOrder {
    fn default() -> Self {
        MapOrder::Unordered
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use crate::cdt::error::WireNameError;

    use super::{ListOrder, MapOrder};

    #[rstest]
    #[case("UNORDERED", ListOrder::Unordered, 0)]
    #[case("ORDERED", ListOrder::Ordered, 1)]
    fn list_orders(#[case] name: &str, #[case] expected: ListOrder, #[case] code: i32) {
        let order = ListOrder::from_str(name).unwrap();
        assert_eq!(order, expected);
        assert_eq!(order.code(), code);
        assert_eq!(order.to_string(), name);
    }

    #[rstest]
    #[case("UNORDERED", MapOrder::Unordered, 0)]
    #[case("KEY_ORDERED", MapOrder::KeyOrdered, 1)]
    #[case("KEY_VALUE_ORDERED", MapOrder::KeyValueOrdered, 3)]
    fn map_orders(#[case] name: &str, #[case] expected: MapOrder, #[case] code: i32) {
        let order = MapOrder::from_str(name).unwrap();
        assert_eq!(order, expected);
        assert_eq!(order.code(), code);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(
            "ordered".parse::<ListOrder>(),
            Err(WireNameError::UnknownName {
                kind: "list order",
                name: "ordered".into()
            })
        );
        assert!("KEY_VALUE".parse::<MapOrder>().is_err());
    }
}
