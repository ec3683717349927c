// SPDX-License-Identifier: AGPL-3.0-or-later

//! Builders for list operations.
use crate::cdt::{ListOrder, ReturnType};
use crate::convert::context::build_context;
use crate::convert::error::InvalidOperationError;
use crate::convert::keys;
use crate::convert::{coerce, flags, policy};
use crate::operation::{ListOperation, ListSelector, Operation};
use crate::plain::PlainFields;

/// Builds a list selector from the fields of a read or remove-by operation.
pub type SelectFn = fn(&PlainFields) -> Result<ListSelector, InvalidOperationError>;

fn list_op<F>(fields: &PlainFields, build: F) -> Result<Operation, InvalidOperationError>
where
    F: FnOnce(&PlainFields) -> Result<ListOperation, InvalidOperationError>,
{
    let bin = coerce::bin_name(fields)?;
    let op = build(fields)?;
    let context = build_context(fields)?;

    Ok(Operation::List { bin, context, op })
}

pub fn by_index(fields: &PlainFields) -> Result<ListSelector, InvalidOperationError> {
    Ok(ListSelector::Index(coerce::int(fields, keys::INDEX)?))
}

pub fn by_index_range(fields: &PlainFields) -> Result<ListSelector, InvalidOperationError> {
    Ok(ListSelector::IndexRange {
        index: coerce::int(fields, keys::INDEX)?,
        count: coerce::optional_int(fields, keys::COUNT)?,
    })
}

pub fn by_rank(fields: &PlainFields) -> Result<ListSelector, InvalidOperationError> {
    Ok(ListSelector::Rank(coerce::int(fields, keys::RANK)?))
}

pub fn by_rank_range(fields: &PlainFields) -> Result<ListSelector, InvalidOperationError> {
    Ok(ListSelector::RankRange {
        rank: coerce::int(fields, keys::RANK)?,
        count: coerce::optional_int(fields, keys::COUNT)?,
    })
}

pub fn by_value(fields: &PlainFields) -> Result<ListSelector, InvalidOperationError> {
    Ok(ListSelector::Value(coerce::value(fields, keys::VALUE)?))
}

/// Absent or `null` bounds select everything below or above the other bound.
pub fn by_value_range(fields: &PlainFields) -> Result<ListSelector, InvalidOperationError> {
    Ok(ListSelector::ValueRange {
        begin: coerce::optional_value(fields, keys::VALUE_BEGIN),
        end: coerce::optional_value(fields, keys::VALUE_END),
    })
}

pub fn by_value_list(fields: &PlainFields) -> Result<ListSelector, InvalidOperationError> {
    Ok(ListSelector::ValueList(coerce::value_list(
        fields,
        keys::VALUES,
    )?))
}

pub fn by_value_rel_rank_range(fields: &PlainFields) -> Result<ListSelector, InvalidOperationError> {
    Ok(ListSelector::ValueRelativeRankRange {
        value: coerce::value(fields, keys::VALUE)?,
        rank: coerce::int(fields, keys::RANK)?,
        count: coerce::optional_int(fields, keys::COUNT)?,
    })
}

fn selection(
    fields: &PlainFields,
    select: SelectFn,
) -> Result<(ListSelector, ReturnType), InvalidOperationError> {
    let selector = select(fields)?;
    let return_type = flags::list_return_type(fields)?;
    Ok((selector, return_type))
}

/// Read operations selecting items by index, rank or value.
pub fn get_by(fields: &PlainFields, select: SelectFn) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        let (selector, return_type) = selection(fields, select)?;
        Ok(ListOperation::GetBy(selector, return_type))
    })
}

/// Remove operations selecting items by index, rank or value.
pub fn remove_by(
    fields: &PlainFields,
    select: SelectFn,
) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        let (selector, return_type) = selection(fields, select)?;
        Ok(ListOperation::RemoveBy(selector, return_type))
    })
}

pub fn append(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::Append(coerce::value(fields, keys::VALUE)?))
    })
}

pub fn append_items(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::AppendItems {
            values: coerce::value_list(fields, keys::VALUES)?,
            policy: policy::list_policy(fields)?,
        })
    })
}

pub fn clear(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |_| Ok(ListOperation::Clear))
}

pub fn get(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::Get(coerce::int(fields, keys::INDEX)?))
    })
}

pub fn get_range(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::GetRange {
            index: coerce::int(fields, keys::INDEX)?,
            count: coerce::optional_int(fields, keys::COUNT)?,
        })
    })
}

/// `LIST_INCREMENT`, a missing `incr` increments by one.
pub fn increment(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        let incr = if fields.contains(keys::INCR) {
            Some(coerce::nullable_value(fields, keys::INCR)?)
        } else {
            None
        };

        Ok(ListOperation::Increment {
            index: coerce::int(fields, keys::INDEX)?,
            incr,
            policy: policy::list_policy(fields)?,
        })
    })
}

pub fn insert(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::Insert {
            index: coerce::int(fields, keys::INDEX)?,
            value: coerce::value(fields, keys::VALUE)?,
            policy: policy::list_policy(fields)?,
        })
    })
}

pub fn insert_items(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::InsertItems {
            index: coerce::int(fields, keys::INDEX)?,
            values: coerce::value_list(fields, keys::VALUES)?,
            policy: policy::list_policy(fields)?,
        })
    })
}

pub fn pop(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::Pop(coerce::int(fields, keys::INDEX)?))
    })
}

pub fn pop_range(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::PopRange {
            index: coerce::int(fields, keys::INDEX)?,
            count: coerce::optional_int(fields, keys::COUNT)?,
        })
    })
}

pub fn remove(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::Remove(coerce::int(fields, keys::INDEX)?))
    })
}

pub fn remove_range(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::RemoveRange {
            index: coerce::int(fields, keys::INDEX)?,
            count: coerce::optional_int(fields, keys::COUNT)?,
        })
    })
}

pub fn set(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::Set {
            index: coerce::int(fields, keys::INDEX)?,
            value: coerce::value(fields, keys::VALUE)?,
            policy: policy::list_policy(fields)?,
        })
    })
}

pub fn set_order(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        let order: ListOrder = coerce::symbol(fields, keys::LIST_ORDER)?;
        Ok(ListOperation::SetOrder(order))
    })
}

pub fn size(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |_| Ok(ListOperation::Size))
}

pub fn sort(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| Ok(ListOperation::Sort(flags::sort_flags(fields)?)))
}

pub fn trim(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::Trim {
            index: coerce::int(fields, keys::INDEX)?,
            count: coerce::int(fields, keys::COUNT)?,
        })
    })
}

pub fn create(fields: &PlainFields) -> Result<Operation, InvalidOperationError> {
    list_op(fields, |fields| {
        Ok(ListOperation::Create {
            order: coerce::symbol(fields, keys::LIST_ORDER)?,
            pad: coerce::boolean(fields, keys::PAD)?,
        })
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::cdt::{
        Context, ContextStep, ListOrder, ListPolicy, ListReturnType, ListSortFlags, ReturnType,
    };
    use crate::convert::error::InvalidOperationError;
    use crate::operation::{ListOperation, ListSelector, Operation};
    use crate::plain::PlainFields;
    use crate::value::Value;

    use super::*;

    fn fields(json: serde_json::Value) -> PlainFields {
        serde_json::from_value(json).unwrap()
    }

    fn op(operation: Operation) -> ListOperation {
        match operation {
            Operation::List { op, .. } => op,
            _ => panic!("expected list operation"),
        }
    }

    #[test]
    fn append_with_context() {
        let operation = append(&fields(json!({
            "bin": "lists",
            "value": 3,
            "mapKey": "scores",
        })))
        .unwrap();

        assert_eq!(
            operation,
            Operation::List {
                bin: "lists".into(),
                context: Context::new(vec![ContextStep::MapKey(Value::from("scores"))]),
                op: ListOperation::Append(Value::Int(3)),
            }
        );
    }

    #[test]
    fn items_with_policy() {
        let operation = append_items(&fields(json!({
            "bin": "lists",
            "values": [1, { "b": 2, "a": 1 }],
            "listPolicy": { "order": "ORDERED", "writeFlags": ["ADD_UNIQUE"] },
        })))
        .unwrap();

        assert_eq!(
            op(operation),
            ListOperation::AppendItems {
                values: vec![
                    Value::Int(1),
                    Value::Map(vec![
                        (Value::from("a"), Value::Int(1)),
                        (Value::from("b"), Value::Int(2))
                    ])
                ],
                policy: ListPolicy::new(ListOrder::Ordered, 1),
            }
        );
    }

    #[test]
    fn selections() {
        let bag = fields(json!({
            "bin": "lists",
            "rank": -1,
            "count": 2,
            "value": "m",
            "listReturnType": "VALUE",
            "inverted": true,
        }));

        assert_eq!(
            op(get_by(&bag, by_value_rel_rank_range).unwrap()),
            ListOperation::GetBy(
                ListSelector::ValueRelativeRankRange {
                    value: Value::from("m"),
                    rank: -1,
                    count: Some(2)
                },
                ReturnType::new(ListReturnType::Value.code(), true)
            )
        );

        let bag = fields(json!({ "bin": "lists", "valueEnd": 10, "listReturnType": "COUNT" }));
        assert_eq!(
            op(remove_by(&bag, by_value_range).unwrap()),
            ListOperation::RemoveBy(
                ListSelector::ValueRange {
                    begin: None,
                    end: Some(Value::Int(10))
                },
                ReturnType::from(ListReturnType::Count)
            )
        );
    }

    #[test]
    fn invalid_return_type() {
        let bag = fields(json!({ "bin": "lists", "index": 0, "listReturnType": "KEY" }));
        assert!(matches!(
            get_by(&bag, by_index),
            Err(InvalidOperationError::InvalidEnum(_))
        ));
    }

    #[test]
    fn increment_defaults() {
        let operation = increment(&fields(json!({ "bin": "lists", "index": 1 }))).unwrap();
        assert_eq!(
            op(operation),
            ListOperation::Increment {
                index: 1,
                incr: None,
                policy: ListPolicy::default(),
            }
        );
    }

    #[test]
    fn sort_and_create() {
        let operation = sort(&fields(json!({
            "bin": "lists",
            "listSortFlags": "DROP_DUPLICATES",
        })))
        .unwrap();
        assert_eq!(op(operation), ListOperation::Sort(ListSortFlags::DropDuplicates));

        let operation = create(&fields(json!({
            "bin": "lists",
            "listOrder": "ORDERED",
            "pad": "true",
        })))
        .unwrap();
        assert_eq!(
            op(operation),
            ListOperation::Create {
                order: ListOrder::Ordered,
                pad: true
            }
        );
    }

    #[test]
    fn trim_needs_count() {
        assert_eq!(
            trim(&fields(json!({ "bin": "lists", "index": 1, "count": "2" }))),
            Err(InvalidOperationError::invalid_type("count", "an integer"))
        );
    }
}
