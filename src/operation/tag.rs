// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use crate::cdt::error::WireNameError;

wire_enum! {
    /// Closed set of operation tags a request can name in its `operation` field.
    ///
    /// Variants are named after their wire tag, `LIST_GET_BY_VALUE_REL_RANK_RANGE` becomes
    /// `ListGetByValueRelRankRange`.
    #[allow(missing_docs)]
    pub enum OperationTag {
        // Record operations
        Add = "ADD",
        Append = "APPEND",
        Get = "GET",
        Prepend = "PREPEND",
        Read = "READ",
        GetHeader = "GET_HEADER",
        Touch = "TOUCH",
        Put = "PUT",
        Delete = "DELETE",

        // List operations
        ListAppend = "LIST_APPEND",
        ListAppendItems = "LIST_APPEND_ITEMS",
        ListClear = "LIST_CLEAR",
        ListGet = "LIST_GET",
        ListGetByIndex = "LIST_GET_BY_INDEX",
        ListGetByIndexRange = "LIST_GET_BY_INDEX_RANGE",
        ListGetByRank = "LIST_GET_BY_RANK",
        ListGetByRankRange = "LIST_GET_BY_RANK_RANGE",
        ListGetByValueRelRankRange = "LIST_GET_BY_VALUE_REL_RANK_RANGE",
        ListGetByValue = "LIST_GET_BY_VALUE",
        ListGetByValueRange = "LIST_GET_BY_VALUE_RANGE",
        ListGetByValueList = "LIST_GET_BY_VALUE_LIST",
        ListGetRange = "LIST_GET_RANGE",
        ListIncrement = "LIST_INCREMENT",
        ListInsert = "LIST_INSERT",
        ListInsertItems = "LIST_INSERT_ITEMS",
        ListPop = "LIST_POP",
        ListPopRange = "LIST_POP_RANGE",
        ListRemove = "LIST_REMOVE",
        ListRemoveByIndex = "LIST_REMOVE_BY_INDEX",
        ListRemoveByIndexRange = "LIST_REMOVE_BY_INDEX_RANGE",
        ListRemoveByRank = "LIST_REMOVE_BY_RANK",
        ListRemoveByRankRange = "LIST_REMOVE_BY_RANK_RANGE",
        ListRemoveByValueRelRankRange = "LIST_REMOVE_BY_VALUE_REL_RANK_RANGE",
        ListRemoveByValue = "LIST_REMOVE_BY_VALUE",
        ListRemoveByValueRange = "LIST_REMOVE_BY_VALUE_RANGE",
        ListRemoveByValueList = "LIST_REMOVE_BY_VALUE_LIST",
        ListRemoveRange = "LIST_REMOVE_RANGE",
        ListSet = "LIST_SET",
        ListSetOrder = "LIST_SET_ORDER",
        ListSize = "LIST_SIZE",
        ListSort = "LIST_SORT",
        ListTrim = "LIST_TRIM",
        ListCreate = "LIST_CREATE",

        // Map operations
        MapClear = "MAP_CLEAR",
        MapDecrement = "MAP_DECREMENT",
        MapGetByIndex = "MAP_GET_BY_INDEX",
        MapGetByIndexRange = "MAP_GET_BY_INDEX_RANGE",
        MapGetByKey = "MAP_GET_BY_KEY",
        MapGetByKeyList = "MAP_GET_BY_KEY_LIST",
        MapGetByKeyRange = "MAP_GET_BY_KEY_RANGE",
        MapGetByRank = "MAP_GET_BY_RANK",
        MapGetByRankRange = "MAP_GET_BY_RANK_RANGE",
        MapGetByValue = "MAP_GET_BY_VALUE",
        MapGetByValueRange = "MAP_GET_BY_VALUE_RANGE",
        MapGetByValueList = "MAP_GET_BY_VALUE_LIST",
        MapGetByKeyRelIndexRange = "MAP_GET_BY_KEY_REL_INDEX_RANGE",
        MapGetByValueRelRankRange = "MAP_GET_BY_VALUE_REL_RANK_RANGE",
        MapIncrement = "MAP_INCREMENT",
        MapPut = "MAP_PUT",
        MapPutItems = "MAP_PUT_ITEMS",
        MapRemoveByIndex = "MAP_REMOVE_BY_INDEX",
        MapRemoveByIndexRange = "MAP_REMOVE_BY_INDEX_RANGE",
        MapRemoveByKey = "MAP_REMOVE_BY_KEY",
        MapRemoveByKeyRange = "MAP_REMOVE_BY_KEY_RANGE",
        MapRemoveByRank = "MAP_REMOVE_BY_RANK",
        MapRemoveByRankRange = "MAP_REMOVE_BY_RANK_RANGE",
        MapRemoveByKeyRelIndexRange = "MAP_REMOVE_BY_KEY_REL_INDEX_RANGE",
        MapRemoveByValueRelRankRange = "MAP_REMOVE_BY_VALUE_REL_RANK_RANGE",
        MapRemoveByValue = "MAP_REMOVE_BY_VALUE",
        MapRemoveByValueRange = "MAP_REMOVE_BY_VALUE_RANGE",
        MapRemoveByValueList = "MAP_REMOVE_BY_VALUE_LIST",
        MapSetMapPolicy = "MAP_SET_MAP_POLICY",
        MapSize = "MAP_SIZE",
        MapCreate = "MAP_CREATE",

        // Bit operations
        BitResize = "BIT_RESIZE",
        BitInsert = "BIT_INSERT",
        BitRemove = "BIT_REMOVE",
        BitSet = "BIT_SET",
        BitOr = "BIT_OR",
        BitXor = "BIT_XOR",
        BitAnd = "BIT_AND",
        BitNot = "BIT_NOT",
        BitLshift = "BIT_LSHIFT",
        BitRshift = "BIT_RSHIFT",
        BitAdd = "BIT_ADD",
        BitSubtract = "BIT_SUBTRACT",
        BitSetInt = "BIT_SET_INT",
        BitGet = "BIT_GET",
        BitCount = "BIT_COUNT",
        BitLscan = "BIT_LSCAN",
        BitRscan = "BIT_RSCAN",
        BitGetInt = "BIT_GET_INT",

        // Approximate-cardinality operations
        HllInit = "HLL_INIT",
        HllAdd = "HLL_ADD",
        HllSetUnion = "HLL_SET_UNION",
        HllSetCount = "HLL_SET_COUNT",
        HllFold = "HLL_FOLD",
        HllCount = "HLL_COUNT",
        HllUnion = "HLL_UNION",
        HllUnionCount = "HLL_UNION_COUNT",
        HllIntersectCount = "HLL_INTERSECT_COUNT",
        HllSimilarity = "HLL_SIMILARITY",
        HllDescribe = "HLL_DESCRIBE",
    }
    unknown(name) => WireNameError::unknown("operation", name);
}

/// Family of store operations a tag belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Operations on whole records or scalar bins.
    Record,

    /// Operations on list bins.
    List,

    /// Operations on map bins.
    Map,

    /// Operations on byte blob bins.
    Bit,

    /// Operations on approximate-cardinality sketches.
    Hll,
}

impl OperationKind {
    /// Returns the operation kind as a string.
    pub fn as_str(&self) -> &str {
        match self {
            OperationKind::Record => "record",
            OperationKind::List => "list",
            OperationKind::Map => "map",
            OperationKind::Bit => "bit",
            OperationKind::Hll => "hll",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OperationTag {
    /// Returns the family of store operations this tag belongs to.
    pub fn kind(&self) -> OperationKind {
        let tag = self.as_str();

        if tag.starts_with("LIST_") {
            OperationKind::List
        } else if tag.starts_with("MAP_") {
            OperationKind::Map
        } else if tag.starts_with("BIT_") {
            OperationKind::Bit
        } else if tag.starts_with("HLL_") {
            OperationKind::Hll
        } else {
            OperationKind::Record
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::{OperationKind, OperationTag};

    #[test]
    fn closed_set_of_tags() {
        assert_eq!(OperationTag::ALL.len(), 103);

        let names: HashSet<&str> = OperationTag::ALL.iter().map(|tag| tag.as_str()).collect();
        assert_eq!(names.len(), 103);

        for tag in OperationTag::ALL {
            assert_eq!(tag.as_str().parse::<OperationTag>(), Ok(*tag));
        }
    }

    #[rstest]
    #[case(OperationKind::Record, 9)]
    #[case(OperationKind::List, 34)]
    #[case(OperationKind::Map, 31)]
    #[case(OperationKind::Bit, 18)]
    #[case(OperationKind::Hll, 11)]
    fn tags_per_kind(#[case] kind: OperationKind, #[case] expected: usize) {
        let count = OperationTag::ALL
            .iter()
            .filter(|tag| tag.kind() == kind)
            .count();
        assert_eq!(count, expected);
    }

    #[test]
    fn unknown_tags() {
        assert!("LIST_FROBNICATE".parse::<OperationTag>().is_err());
        assert!("list_append".parse::<OperationTag>().is_err());
        assert_eq!(
            OperationTag::ListGetByValueRelRankRange.to_string(),
            "LIST_GET_BY_VALUE_REL_RANK_RANGE"
        );
        assert_eq!(OperationTag::BitLshift.as_str(), "BIT_LSHIFT");
    }
}
