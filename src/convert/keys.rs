// SPDX-License-Identifier: AGPL-3.0-or-later

//! Field names of the wire vocabulary.
#![allow(missing_docs)]

pub const BIN: &str = "bin";
pub const INDEX: &str = "index";
pub const RANK: &str = "rank";
pub const COUNT: &str = "count";
pub const VALUE: &str = "value";
pub const VALUES: &str = "values";
pub const VALUE_BEGIN: &str = "valueBegin";
pub const VALUE_END: &str = "valueEnd";
pub const KEY: &str = "key";
pub const KEY_BEGIN: &str = "keyBegin";
pub const KEY_END: &str = "keyEnd";
pub const KEYS: &str = "keys";
pub const MAP: &str = "map";
pub const INCR: &str = "incr";
pub const DECR: &str = "decr";
pub const ORDER: &str = "order";
pub const PAD: &str = "pad";
pub const INVERTED: &str = "inverted";

pub const LIST_RETURN_TYPE: &str = "listReturnType";
pub const LIST_ORDER: &str = "listOrder";
pub const LIST_POLICY: &str = "listPolicy";
pub const LIST_SORT_FLAGS: &str = "listSortFlags";

pub const MAP_RETURN_TYPE: &str = "mapReturnType";
pub const MAP_ORDER: &str = "mapOrder";
pub const MAP_POLICY: &str = "mapPolicy";

pub const WRITE_FLAGS: &str = "writeFlags";
pub const WRITE_MODE: &str = "writeMode";

pub const BYTE_SIZE: &str = "byteSize";
pub const BYTE_OFFSET: &str = "byteOffset";
pub const BIT_OFFSET: &str = "bitOffset";
pub const BIT_SIZE: &str = "bitSize";
pub const RESIZE_FLAGS: &str = "resizeFlags";
pub const SHIFT: &str = "shift";
pub const SIGNED: &str = "signed";
pub const BIT_OVERFLOW_ACTION: &str = "bitOverflowAction";

pub const INDEX_BIT_COUNT: &str = "indexBitCount";
pub const MIN_HASH_BIT_COUNT: &str = "minHashBitCount";

pub const LIST_INDEX: &str = "listIndex";
pub const LIST_INDEX_CREATE: &str = "listIndexCreate";
pub const LIST_RANK: &str = "listRank";
pub const LIST_VALUE: &str = "listValue";
pub const MAP_INDEX: &str = "mapIndex";
pub const MAP_RANK: &str = "mapRank";
pub const MAP_KEY: &str = "mapKey";
pub const MAP_KEY_CREATE: &str = "mapKeyCreate";
pub const MAP_VALUE: &str = "mapValue";

/// Addressing fields, in the order their context steps are built.
///
/// These are allowed on every operation.
pub const ADDRESSING: [&str; 9] = [
    LIST_INDEX,
    LIST_INDEX_CREATE,
    LIST_RANK,
    LIST_VALUE,
    MAP_INDEX,
    MAP_RANK,
    MAP_KEY,
    MAP_KEY_CREATE,
    MAP_VALUE,
];
