// SPDX-License-Identifier: AGPL-3.0-or-later

//! Builders for approximate-cardinality (HLL) operations.
use crate::convert::coerce;
use crate::convert::error::InvalidOperationError;
use crate::convert::keys;
use crate::operation::{HllOperation, Operation, UNSET_BIT_COUNT};
use crate::plain::PlainFields;

fn hll_op<F>(fields: &PlainFields, build: F) -> Result<Operation, InvalidOperationError>
where
    F: FnOnce(&PlainFields) -> Result<HllOperation, InvalidOperationError>,
{
    let bin = coerce::bin_name(fields)?;
    let op = build(fields)?;

    Ok(Operation::Hll { bin, op })
}

fn bit_count(fields: &PlainFields, name: &str) -> Result<i32, InvalidOperationError> {
    Ok(coerce::optional_int(fields, name)?.unwrap_or(UNSET_BIT_COUNT))
}

pub fn init(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    hll_op(fields, |fields| {
        Ok(HllOperation::Init {
            index_bit_count: coerce::int(fields, keys::INDEX_BIT_COUNT)?,
            min_hash_bit_count: bit_count(fields, keys::MIN_HASH_BIT_COUNT)?,
        })
    })
}

/// `HLL_ADD`, takes generic values rather than sketches.
pub fn add(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    hll_op(fields, |fields| {
        Ok(HllOperation::Add {
            values: coerce::value_list(fields, keys::VALUES)?,
            index_bit_count: bit_count(fields, keys::INDEX_BIT_COUNT)?,
            min_hash_bit_count: bit_count(fields, keys::MIN_HASH_BIT_COUNT)?,
        })
    })
}

pub fn set_union(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    hll_op(fields, |fields| {
        Ok(HllOperation::SetUnion(coerce::hll_values(fields, keys::VALUES)?))
    })
}

pub fn refresh_count(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    hll_op(fields, |_| Ok(HllOperation::RefreshCount))
}

pub fn fold(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    hll_op(fields, |fields| {
        Ok(HllOperation::Fold(coerce::int(fields, keys::INDEX_BIT_COUNT)?))
    })
}

pub fn get_count(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    hll_op(fields, |_| Ok(HllOperation::GetCount))
}

pub fn get_union(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    hll_op(fields, |fields| {
        Ok(HllOperation::GetUnion(coerce::hll_values(fields, keys::VALUES)?))
    })
}

pub fn get_union_count(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    hll_op(fields, |fields| {
        Ok(HllOperation::GetUnionCount(coerce::hll_values(
            fields,
            keys::VALUES,
        )?))
    })
}

pub fn get_intersect_count(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    hll_op(fields, |fields| {
        Ok(HllOperation::GetIntersectCount(coerce::hll_values(
            fields,
            keys::VALUES,
        )?))
    })
}

pub fn get_similarity(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    hll_op(fields, |fields| {
        Ok(HllOperation::GetSimilarity(coerce::hll_values(
            fields,
            keys::VALUES,
        )?))
    })
}

pub fn describe(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    hll_op(fields, |_| Ok(HllOperation::Describe))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::operation::{HllOperation, Operation, UNSET_BIT_COUNT};
    use crate::plain::PlainFields;
    use crate::value::{HllValue, Value};

    use super::{add, init, set_union};

    fn fields(json: serde_json::Value) -> PlainFields {
        serde_json::from_value(json).unwrap()
    }

    fn op(operation: Operation) -> HllOperation {
        match operation {
            Operation::Hll { op, .. } => op,
            _ => panic!("expected hll operation"),
        }
    }

    #[test]
    fn unset_bit_counts() {
        let operation = init(&fields(json!({ "bin": "visitors", "indexBitCount": 12 }))).unwrap();
        assert_eq!(
            op(operation),
            HllOperation::Init {
                index_bit_count: 12,
                min_hash_bit_count: UNSET_BIT_COUNT
            }
        );

        let operation = add(&fields(json!({
            "bin": "visitors",
            "values": ["panda", 7],
            "minHashBitCount": 4,
        })))
        .unwrap();
        assert_eq!(
            op(operation),
            HllOperation::Add {
                values: vec![Value::from("panda"), Value::Int(7)],
                index_bit_count: UNSET_BIT_COUNT,
                min_hash_bit_count: 4
            }
        );
    }

    #[test]
    fn sketches_are_base64() {
        let operation = set_union(&fields(json!({ "bin": "visitors", "values": ["AAE="] })));
        assert_eq!(
            op(operation.unwrap()),
            HllOperation::SetUnion(vec![HllValue::new(vec![0, 1])])
        );

        let operation = set_union(&fields(json!({ "bin": "visitors", "values": ["%%"] })));
        assert!(operation.is_err());
    }
}
