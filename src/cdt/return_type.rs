// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use crate::cdt::error::WireNameError;

/// Bit which inverts the selection of a read or remove operation.
pub const INVERTED: i32 = 0x10000;

wire_enum! {
    /// What a list read or remove-by-selector operation yields.
    pub enum ListReturnType {
        /// Nothing.
        None = "NONE",

        /// Index of each selected item.
        Index = "INDEX",

        /// Reverse index of each selected item.
        ReverseIndex = "REVERSE_INDEX",

        /// Value order of each selected item.
        Rank = "RANK",

        /// Reverse value order of each selected item.
        ReverseRank = "REVERSE_RANK",

        /// Number of selected items.
        Count = "COUNT",

        /// Value of each selected item.
        Value = "VALUE",
    }
    unknown(name) => WireNameError::unknown("listReturnType", name);
}

impl ListReturnType {
    /// Returns the numeric code the store uses for this return type.
    pub fn code(&self) -> i32 {
        match self {
            ListReturnType::None => 0,
            ListReturnType::Index => 1,
            ListReturnType::ReverseIndex => 2,
            ListReturnType::Rank => 3,
            ListReturnType::ReverseRank => 4,
            ListReturnType::Count => 5,
            ListReturnType::Value => 7,
        }
    }
}

wire_enum! {
    /// What a map read or remove-by-selector operation yields.
    pub enum MapReturnType {
        /// Nothing.
        None = "NONE",

        /// Key index of each selected entry.
        Index = "INDEX",

        /// Reverse key index of each selected entry.
        ReverseIndex = "REVERSE_INDEX",

        /// Value order of each selected entry.
        Rank = "RANK",

        /// Reverse value order of each selected entry.
        ReverseRank = "REVERSE_RANK",

        /// Number of selected entries.
        Count = "COUNT",

        /// Key of each selected entry.
        Key = "KEY",

        /// Value of each selected entry.
        Value = "VALUE",

        /// Key and value of each selected entry.
        KeyValue = "KEY_VALUE",
    }
    unknown(name) => WireNameError::unknown("mapReturnType", name);
}

impl MapReturnType {
    /// Returns the numeric code the store uses for this return type.
    pub fn code(&self) -> i32 {
        match self {
            MapReturnType::None => 0,
            MapReturnType::Index => 1,
            MapReturnType::ReverseIndex => 2,
            MapReturnType::Rank => 3,
            MapReturnType::ReverseRank => 4,
            MapReturnType::Count => 5,
            MapReturnType::Key => 6,
            MapReturnType::Value => 7,
            MapReturnType::KeyValue => 8,
        }
    }
}

/// Composed return type code: a base return type, optionally with the inversion bit set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReturnType(i32);

impl ReturnType {
    /// Composes a return type code from a base code and the inversion modifier.
    pub fn new(base: i32, inverted: bool) -> Self {
        if inverted {
            Self(base | INVERTED)
        } else {
            Self(base)
        }
    }

    /// Returns the composed code as handed to the store.
    pub fn code(&self) -> i32 {
        self.0
    }

    /// Returns the base code without the inversion bit.
    pub fn base(&self) -> i32 {
        self.0 & !INVERTED
    }

    /// Returns true if the inversion bit is set.
    pub fn is_inverted(&self) -> bool {
        self.0 & INVERTED != 0
    }

    /// Returns this return type with the inversion bit flipped.
    pub fn inverted(&self) -> Self {
        Self(self.0 ^ INVERTED)
    }
}

impl From<ListReturnType> for ReturnType {
    fn from(return_type: ListReturnType) -> Self {
        Self::new(return_type.code(), false)
    }
}

impl From<MapReturnType> for ReturnType {
    fn from(return_type: MapReturnType) -> Self {
        Self::new(return_type.code(), false)
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ListReturnType, MapReturnType, ReturnType, INVERTED};

    #[rstest]
    #[case(ListReturnType::None, 0)]
    #[case(ListReturnType::Index, 1)]
    #[case(ListReturnType::ReverseIndex, 2)]
    #[case(ListReturnType::Rank, 3)]
    #[case(ListReturnType::ReverseRank, 4)]
    #[case(ListReturnType::Count, 5)]
    #[case(ListReturnType::Value, 7)]
    fn list_return_type_codes(#[case] return_type: ListReturnType, #[case] code: i32) {
        assert_eq!(return_type.code(), code);
        assert_eq!(return_type.as_str().parse::<ListReturnType>(), Ok(return_type));
    }

    #[test]
    fn map_return_type_codes() {
        assert_eq!(MapReturnType::Key.code(), 6);
        assert_eq!(MapReturnType::KeyValue.code(), 8);
        assert_eq!("KEY_VALUE".parse::<MapReturnType>(), Ok(MapReturnType::KeyValue));

        // Keys only exist in maps
        assert!("KEY".parse::<ListReturnType>().is_err());
    }

    #[test]
    fn inversion() {
        let return_type = ReturnType::new(MapReturnType::Count.code(), true);
        assert_eq!(return_type.code(), 5 | INVERTED);
        assert_eq!(return_type.base(), 5);
        assert!(return_type.is_inverted());

        let plain = return_type.inverted();
        assert_eq!(plain, ReturnType::from(MapReturnType::Count));
        assert!(!plain.is_inverted());

        // Inverting twice gives the original code
        assert_eq!(plain.inverted().inverted(), plain);
        assert_eq!(return_type.inverted().inverted(), return_type);
    }

    #[test]
    fn display_hex() {
        assert_eq!(ReturnType::new(7, true).to_string(), "0x10007");
    }
}
