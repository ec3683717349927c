// SPDX-License-Identifier: AGPL-3.0-or-later

//! Dispatch table from operation tags to their field schema and builder.
//!
//! Every tag is registered exactly once, together with the fields it accepts and the builder
//! producing its typed operation. Dispatching a request first validates the field bag against the
//! schema and only then runs the builder.
use std::collections::HashMap;
use std::fmt;

use log::debug;
use once_cell::sync::Lazy;

use crate::convert::builders::{bit, hll, list, map, record, BuildFn};
use crate::convert::error::InvalidOperationError;
use crate::convert::keys::*;
use crate::convert::schema::FieldSchema;
use crate::operation::{Operation, OperationTag};
use crate::plain::PlainFields;

/// Field schema and builder of an operation tag.
#[derive(Clone, Copy)]
pub struct Registration {
    schema: FieldSchema,
    build: BuildFn,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl Registration {
    /// Returns the field schema of this tag.
    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Validates the field bag and builds the typed operation.
    pub fn dispatch(&self, fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
        self.schema.validate(fields)?;
        (self.build)(fields)
    }
}

fn entry(
    tag: OperationTag,
    required: &'static [&'static str],
    optional: &'static [&'static str],
    build: BuildFn,
) -> (OperationTag, Registration) {
    let schema = FieldSchema::new(required, optional);
    (tag, Registration { schema, build })
}

static REGISTRY: Lazy<HashMap<OperationTag, Registration>> = Lazy::new(|| {
    use OperationTag::*;

    let registrations = vec![
        // Record operations
        entry(Add, &[BIN, INCR], &[], record::add),
        entry(Append, &[BIN, VALUE], &[], record::append),
        entry(Get, &[], &[BIN], record::get),
        entry(Prepend, &[BIN, VALUE], &[], record::prepend),
        entry(Read, &[BIN], &[], record::read),
        entry(GetHeader, &[], &[], record::get_header),
        entry(Touch, &[], &[], record::touch),
        entry(Put, &[BIN, VALUE], &[], record::put),
        entry(Delete, &[], &[], record::delete),
        // List operations
        entry(ListAppend, &[BIN, VALUE], &[], list::append),
        entry(ListAppendItems, &[BIN, VALUES], &[LIST_POLICY], list::append_items),
        entry(ListClear, &[BIN], &[], list::clear),
        entry(ListGet, &[BIN, INDEX], &[], list::get),
        entry(
            ListGetByIndex,
            &[BIN, INDEX, LIST_RETURN_TYPE],
            &[INVERTED],
            |fields| list::get_by(fields, list::by_index),
        ),
        entry(
            ListGetByIndexRange,
            &[BIN, INDEX, LIST_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| list::get_by(fields, list::by_index_range),
        ),
        entry(
            ListGetByRank,
            &[BIN, RANK, LIST_RETURN_TYPE],
            &[INVERTED],
            |fields| list::get_by(fields, list::by_rank),
        ),
        entry(
            ListGetByRankRange,
            &[BIN, RANK, LIST_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| list::get_by(fields, list::by_rank_range),
        ),
        entry(
            ListGetByValueRelRankRange,
            &[BIN, RANK, VALUE, LIST_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| list::get_by(fields, list::by_value_rel_rank_range),
        ),
        entry(
            ListGetByValue,
            &[BIN, VALUE, LIST_RETURN_TYPE],
            &[INVERTED],
            |fields| list::get_by(fields, list::by_value),
        ),
        entry(
            ListGetByValueRange,
            &[BIN, LIST_RETURN_TYPE],
            &[VALUE_BEGIN, VALUE_END, INVERTED],
            |fields| list::get_by(fields, list::by_value_range),
        ),
        entry(
            ListGetByValueList,
            &[BIN, VALUES, LIST_RETURN_TYPE],
            &[INVERTED],
            |fields| list::get_by(fields, list::by_value_list),
        ),
        entry(ListGetRange, &[BIN, INDEX], &[COUNT], list::get_range),
        entry(ListIncrement, &[BIN, INDEX], &[INCR, LIST_POLICY], list::increment),
        entry(ListInsert, &[BIN, INDEX, VALUE], &[LIST_POLICY], list::insert),
        entry(
            ListInsertItems,
            &[BIN, INDEX, VALUES],
            &[LIST_POLICY],
            list::insert_items,
        ),
        entry(ListPop, &[BIN, INDEX], &[], list::pop),
        entry(ListPopRange, &[BIN, INDEX], &[COUNT], list::pop_range),
        entry(ListRemove, &[BIN, INDEX], &[], list::remove),
        entry(
            ListRemoveByIndex,
            &[BIN, INDEX, LIST_RETURN_TYPE],
            &[INVERTED],
            |fields| list::remove_by(fields, list::by_index),
        ),
        entry(
            ListRemoveByIndexRange,
            &[BIN, INDEX, LIST_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| list::remove_by(fields, list::by_index_range),
        ),
        entry(
            ListRemoveByRank,
            &[BIN, RANK, LIST_RETURN_TYPE],
            &[INVERTED],
            |fields| list::remove_by(fields, list::by_rank),
        ),
        entry(
            ListRemoveByRankRange,
            &[BIN, RANK, LIST_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| list::remove_by(fields, list::by_rank_range),
        ),
        entry(
            ListRemoveByValueRelRankRange,
            &[BIN, RANK, VALUE, LIST_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| list::remove_by(fields, list::by_value_rel_rank_range),
        ),
        entry(
            ListRemoveByValue,
            &[BIN, VALUE, LIST_RETURN_TYPE],
            &[INVERTED],
            |fields| list::remove_by(fields, list::by_value),
        ),
        entry(
            ListRemoveByValueRange,
            &[BIN, LIST_RETURN_TYPE],
            &[VALUE_BEGIN, VALUE_END, INVERTED],
            |fields| list::remove_by(fields, list::by_value_range),
        ),
        entry(
            ListRemoveByValueList,
            &[BIN, VALUES, LIST_RETURN_TYPE],
            &[INVERTED],
            |fields| list::remove_by(fields, list::by_value_list),
        ),
        entry(ListRemoveRange, &[BIN, INDEX], &[COUNT], list::remove_range),
        entry(ListSet, &[BIN, INDEX, VALUE], &[LIST_POLICY], list::set),
        entry(ListSetOrder, &[BIN, LIST_ORDER], &[], list::set_order),
        entry(ListSize, &[BIN], &[], list::size),
        entry(ListSort, &[BIN], &[LIST_SORT_FLAGS], list::sort),
        entry(ListTrim, &[BIN, INDEX, COUNT], &[], list::trim),
        entry(ListCreate, &[BIN, LIST_ORDER], &[PAD], list::create),
        // Map operations
        entry(MapClear, &[BIN], &[], map::clear),
        entry(MapDecrement, &[BIN, DECR, KEY], &[MAP_POLICY], map::decrement),
        entry(
            MapGetByIndex,
            &[BIN, INDEX, MAP_RETURN_TYPE],
            &[INVERTED],
            |fields| map::get_by(fields, map::by_index),
        ),
        entry(
            MapGetByIndexRange,
            &[BIN, INDEX, MAP_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| map::get_by(fields, map::by_index_range),
        ),
        entry(
            MapGetByKey,
            &[BIN, KEY, MAP_RETURN_TYPE],
            &[INVERTED],
            |fields| map::get_by(fields, map::by_key),
        ),
        entry(
            MapGetByKeyList,
            &[BIN, KEYS, MAP_RETURN_TYPE],
            &[INVERTED],
            |fields| map::get_by(fields, map::by_key_list),
        ),
        entry(
            MapGetByKeyRange,
            &[BIN, MAP_RETURN_TYPE],
            &[KEY_BEGIN, KEY_END, INVERTED],
            |fields| map::get_by(fields, map::by_key_range),
        ),
        entry(
            MapGetByRank,
            &[BIN, RANK, MAP_RETURN_TYPE],
            &[INVERTED],
            |fields| map::get_by(fields, map::by_rank),
        ),
        entry(
            MapGetByRankRange,
            &[BIN, RANK, MAP_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| map::get_by(fields, map::by_rank_range),
        ),
        entry(
            MapGetByValue,
            &[BIN, VALUE, MAP_RETURN_TYPE],
            &[INVERTED],
            |fields| map::get_by(fields, map::by_value),
        ),
        entry(
            MapGetByValueRange,
            &[BIN, MAP_RETURN_TYPE],
            &[VALUE_BEGIN, VALUE_END, INVERTED],
            |fields| map::get_by(fields, map::by_value_range),
        ),
        entry(
            MapGetByValueList,
            &[BIN, VALUES, MAP_RETURN_TYPE],
            &[INVERTED],
            |fields| map::get_by(fields, map::by_value_list),
        ),
        entry(
            MapGetByKeyRelIndexRange,
            &[BIN, INDEX, VALUE, MAP_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| map::get_by(fields, map::by_key_rel_index_range),
        ),
        entry(
            MapGetByValueRelRankRange,
            &[BIN, RANK, VALUE, MAP_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| map::get_by(fields, map::by_value_rel_rank_range),
        ),
        entry(MapIncrement, &[BIN, INCR, KEY], &[MAP_POLICY], map::increment),
        entry(MapPut, &[BIN, VALUE, KEY], &[MAP_POLICY], map::put),
        entry(MapPutItems, &[BIN, MAP], &[MAP_POLICY], map::put_items),
        entry(
            MapRemoveByIndex,
            &[BIN, INDEX, MAP_RETURN_TYPE],
            &[INVERTED],
            |fields| map::remove_by(fields, map::by_index),
        ),
        entry(
            MapRemoveByIndexRange,
            &[BIN, INDEX, MAP_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| map::remove_by(fields, map::by_index_range),
        ),
        entry(
            MapRemoveByKey,
            &[BIN, KEY, MAP_RETURN_TYPE],
            &[INVERTED],
            |fields| map::remove_by(fields, map::by_key),
        ),
        entry(
            MapRemoveByKeyRange,
            &[BIN, MAP_RETURN_TYPE],
            &[KEY_BEGIN, KEY_END, INVERTED],
            |fields| map::remove_by(fields, map::by_key_range),
        ),
        entry(
            MapRemoveByRank,
            &[BIN, RANK, MAP_RETURN_TYPE],
            &[INVERTED],
            |fields| map::remove_by(fields, map::by_rank),
        ),
        entry(
            MapRemoveByRankRange,
            &[BIN, RANK, MAP_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| map::remove_by(fields, map::by_rank_range),
        ),
        entry(
            MapRemoveByKeyRelIndexRange,
            &[BIN, INDEX, VALUE, MAP_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| map::remove_by(fields, map::by_key_rel_index_range),
        ),
        entry(
            MapRemoveByValueRelRankRange,
            &[BIN, RANK, VALUE, MAP_RETURN_TYPE],
            &[COUNT, INVERTED],
            |fields| map::remove_by(fields, map::by_value_rel_rank_range),
        ),
        entry(
            MapRemoveByValue,
            &[BIN, VALUE, MAP_RETURN_TYPE],
            &[INVERTED],
            |fields| map::remove_by(fields, map::by_value),
        ),
        entry(
            MapRemoveByValueRange,
            &[BIN, MAP_RETURN_TYPE],
            &[VALUE_BEGIN, VALUE_END, INVERTED],
            |fields| map::remove_by(fields, map::by_value_range),
        ),
        entry(
            MapRemoveByValueList,
            &[BIN, VALUES, MAP_RETURN_TYPE],
            &[INVERTED],
            |fields| map::remove_by(fields, map::by_value_list),
        ),
        entry(MapSetMapPolicy, &[BIN, MAP_POLICY], &[], map::set_policy),
        entry(MapSize, &[BIN], &[], map::size),
        entry(MapCreate, &[BIN, MAP_ORDER], &[], map::create),
        // Bit operations
        entry(BitResize, &[BIN, BYTE_SIZE, RESIZE_FLAGS], &[], bit::resize),
        entry(BitInsert, &[BIN, BYTE_OFFSET, VALUE], &[], bit::insert),
        entry(BitRemove, &[BIN, BYTE_OFFSET, BYTE_SIZE], &[], bit::remove),
        entry(BitSet, &[BIN, BIT_OFFSET, BIT_SIZE, VALUE], &[], bit::set),
        entry(BitOr, &[BIN, BIT_OFFSET, BIT_SIZE, VALUE], &[], bit::or),
        entry(BitXor, &[BIN, BIT_OFFSET, BIT_SIZE, VALUE], &[], bit::xor),
        entry(BitAnd, &[BIN, BIT_OFFSET, BIT_SIZE, VALUE], &[], bit::and),
        entry(BitNot, &[BIN, BIT_OFFSET, BIT_SIZE], &[], bit::not),
        entry(BitLshift, &[BIN, BIT_OFFSET, BIT_SIZE, SHIFT], &[], bit::lshift),
        entry(BitRshift, &[BIN, BIT_OFFSET, BIT_SIZE, SHIFT], &[], bit::rshift),
        entry(
            BitAdd,
            &[BIN, BIT_OFFSET, BIT_SIZE, VALUE],
            &[SIGNED, BIT_OVERFLOW_ACTION],
            bit::add,
        ),
        entry(
            BitSubtract,
            &[BIN, BIT_OFFSET, BIT_SIZE, VALUE],
            &[SIGNED, BIT_OVERFLOW_ACTION],
            bit::subtract,
        ),
        entry(BitSetInt, &[BIN, BIT_OFFSET, BIT_SIZE, VALUE], &[], bit::set_int),
        entry(BitGet, &[BIN, BIT_OFFSET, BIT_SIZE], &[], bit::get),
        entry(BitCount, &[BIN, BIT_OFFSET, BIT_SIZE], &[], bit::count),
        entry(BitLscan, &[BIN, BIT_OFFSET, BIT_SIZE], &[VALUE], bit::lscan),
        entry(BitRscan, &[BIN, BIT_OFFSET, BIT_SIZE], &[VALUE], bit::rscan),
        entry(BitGetInt, &[BIN, BIT_OFFSET, BIT_SIZE], &[SIGNED], bit::get_int),
        // Approximate-cardinality operations
        entry(HllInit, &[BIN, INDEX_BIT_COUNT], &[MIN_HASH_BIT_COUNT], hll::init),
        entry(
            HllAdd,
            &[BIN, VALUES],
            &[INDEX_BIT_COUNT, MIN_HASH_BIT_COUNT],
            hll::add,
        ),
        entry(HllSetUnion, &[BIN, VALUES], &[], hll::set_union),
        entry(HllSetCount, &[BIN], &[], hll::refresh_count),
        entry(HllFold, &[BIN, INDEX_BIT_COUNT], &[], hll::fold),
        entry(HllCount, &[BIN], &[], hll::get_count),
        entry(HllUnion, &[BIN, VALUES], &[], hll::get_union),
        entry(HllUnionCount, &[BIN, VALUES], &[], hll::get_union_count),
        entry(HllIntersectCount, &[BIN, VALUES], &[], hll::get_intersect_count),
        entry(HllSimilarity, &[BIN, VALUES], &[], hll::get_similarity),
        entry(HllDescribe, &[BIN], &[], hll::describe),
    ];

    registrations.into_iter().collect()
});

/// Returns the registration of an operation tag.
pub fn registration(tag: OperationTag) -> Option<&'static Registration> {
    REGISTRY.get(&tag)
}

impl OperationTag {
    /// Returns the fields this operation requires and accepts.
    pub fn schema(&self) -> Option<&'static FieldSchema> {
        registration(*self).map(Registration::schema)
    }
}

/// Validates a field bag against the schema of the tag and builds its typed operation.
pub fn dispatch(tag: OperationTag, fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    let registration =
        registration(tag).ok_or_else(|| InvalidOperationError::UnknownOperation(tag.to_string()))?;

    debug!("Dispatching {} operation with {} fields", tag, fields.len());
    registration.dispatch(fields)
}
