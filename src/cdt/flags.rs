// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::cdt::error::WireNameError;

wire_enum! {
    /// Single write flag of a list policy. Flags are combined into a bitmask.
    pub enum ListWriteFlags {
        /// Default semantics, contributes no bit.
        Default = "DEFAULT",

        /// Only add values which are not in the list yet.
        AddUnique = "ADD_UNIQUE",

        /// Do not allow inserts beyond the end of the list.
        InsertBounded = "INSERT_BOUNDED",

        /// Do not fail when a write is rejected by another flag.
        NoFail = "NO_FAIL",

        /// Commit the items which were accepted when writing several of them.
        Partial = "PARTIAL",
    }
    unknown(name) => WireNameError::unknown("list write flag", name);
}

impl ListWriteFlags {
    /// Returns the bit the store uses for this flag.
    pub fn code(&self) -> i32 {
        match self {
            ListWriteFlags::Default => 0,
            ListWriteFlags::AddUnique => 1,
            ListWriteFlags::InsertBounded => 2,
            ListWriteFlags::NoFail => 4,
            ListWriteFlags::Partial => 8,
        }
    }
}

wire_enum! {
    /// Single write flag of a map policy. Flags are combined into a bitmask.
    pub enum MapWriteFlags {
        /// Default semantics, contributes no bit.
        Default = "DEFAULT",

        /// Only create entries for keys which do not exist yet.
        CreateOnly = "CREATE_ONLY",

        /// Only update entries for keys which already exist.
        UpdateOnly = "UPDATE_ONLY",

        /// Do not fail when a write is rejected by another flag.
        NoFail = "NO_FAIL",

        /// Commit the entries which were accepted when writing several of them.
        Partial = "PARTIAL",
    }
    unknown(name) => WireNameError::unknown("map write flag", name);
}

impl MapWriteFlags {
    /// Returns the bit the store uses for this flag.
    pub fn code(&self) -> i32 {
        match self {
            MapWriteFlags::Default => 0,
            MapWriteFlags::CreateOnly => 1,
            MapWriteFlags::UpdateOnly => 2,
            MapWriteFlags::NoFail => 4,
            MapWriteFlags::Partial => 8,
        }
    }
}

wire_enum! {
    /// Legacy write mode of a map policy, superseded by `MapWriteFlags`.
    pub enum MapWriteMode {
        /// Create or update entries.
        Update = "UPDATE",

        /// Only update existing entries.
        UpdateOnly = "UPDATE_ONLY",

        /// Only create new entries.
        CreateOnly = "CREATE_ONLY",
    }
    unknown(name) => WireNameError::unknown("write mode", name);
}

impl Default for MapWriteMode {
    fn default() -> Self {
        MapWriteMode::Update
    }
}

wire_enum! {
    /// Flags of a list sort operation.
    pub enum ListSortFlags {
        /// Keep duplicate values.
        Default = "DEFAULT",

        /// Drop duplicate values while sorting.
        DropDuplicates = "DROP_DUPLICATES",
    }
    unknown(name) => WireNameError::unknown("listSortFlags", name);
}

impl ListSortFlags {
    /// Returns the numeric code the store uses for these sort flags.
    pub fn code(&self) -> i32 {
        match self {
            ListSortFlags::Default => 0,
            ListSortFlags::DropDuplicates => 2,
        }
    }
}

impl Default for ListSortFlags {
    fn default() -> Self {
        ListSortFlags::Default
    }
}

wire_enum! {
    /// Behaviour of arithmetic bit operations when the result exceeds the bit field.
    pub enum BitOverflowAction {
        /// Fail the operation.
        Fail = "FAIL",

        /// Clamp to the minimum or maximum value of the field.
        Saturate = "SATURATE",

        /// Wrap around.
        Wrap = "WRAP",
    }
    unknown(name) => WireNameError::unknown("bitOverflowAction", name);
}

impl BitOverflowAction {
    /// Returns the numeric code the store uses for this action.
    pub fn code(&self) -> i32 {
        match self {
            BitOverflowAction::Fail => 0,
            BitOverflowAction::Saturate => 2,
            BitOverflowAction::Wrap => 4,
        }
    }

    /// Parses the name of an overflow action, ignoring its case.
    pub fn parse_ignore_case(name: &str) -> Result<Self, WireNameError> {
        name.to_ascii_uppercase()
            .parse()
            .map_err(|_| WireNameError::unknown("bitOverflowAction", name))
    }
}

impl Default for BitOverflowAction {
    fn default() -> Self {
        BitOverflowAction::Fail
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{BitOverflowAction, ListSortFlags, ListWriteFlags, MapWriteFlags, MapWriteMode};

    #[test]
    fn flag_bits_are_disjoint() {
        let list = ListWriteFlags::ALL
            .iter()
            .fold(0, |acc, flag| {
                assert_eq!(acc & flag.code(), 0);
                acc | flag.code()
            });
        assert_eq!(list, 15);

        let map = MapWriteFlags::ALL
            .iter()
            .fold(0, |acc, flag| {
                assert_eq!(acc & flag.code(), 0);
                acc | flag.code()
            });
        assert_eq!(map, 15);
    }

    #[test]
    fn write_modes() {
        assert_eq!("UPDATE_ONLY".parse::<MapWriteMode>(), Ok(MapWriteMode::UpdateOnly));
        assert_eq!(MapWriteMode::default(), MapWriteMode::Update);
        assert!("update".parse::<MapWriteMode>().is_err());
    }

    #[test]
    fn sort_flags() {
        assert_eq!(ListSortFlags::default().code(), 0);
        assert_eq!(
            "DROP_DUPLICATES".parse::<ListSortFlags>().map(|flags| flags.code()),
            Ok(2)
        );
    }

    #[rstest]
    #[case("FAIL", BitOverflowAction::Fail)]
    #[case("saturate", BitOverflowAction::Saturate)]
    #[case("Wrap", BitOverflowAction::Wrap)]
    fn overflow_action_ignores_case(#[case] name: &str, #[case] expected: BitOverflowAction) {
        assert_eq!(BitOverflowAction::parse_ignore_case(name), Ok(expected));
    }

    #[test]
    fn unknown_overflow_action() {
        let error = BitOverflowAction::parse_ignore_case("explode").unwrap_err();
        assert_eq!(error.to_string(), "invalid bitOverflowAction: explode");

        // The strict parser is case-sensitive
        assert!("wrap".parse::<BitOverflowAction>().is_err());
    }
}
