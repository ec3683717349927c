// SPDX-License-Identifier: AGPL-3.0-or-later

//! End-to-end conversions of decoded envelopes into typed operations.
use ciborium::value::Value as Cbor;
use rstest::rstest;
use serde_json::json;

use operate_rs::cdt::{
    Context, ContextStep, ListOrder, ListPolicy, ListReturnType, MapOrder, ReturnType, INVERTED,
};
use operate_rs::convert::error::InvalidOperationError;
use operate_rs::convert::{convert_operation, convert_operations};
use operate_rs::operation::{
    BitOperation, ListOperation, ListSelector, MapOperation, Operation, OperationTag,
};
use operate_rs::plain::PlainOperation;
use operate_rs::value::Value;

fn convert(json: serde_json::Value) -> Result<Operation, InvalidOperationError> {
    let envelope: PlainOperation = serde_json::from_value(json).unwrap();
    convert_operation(&envelope)
}

#[test]
fn count_bits() {
    let envelope: PlainOperation = serde_json::from_str(
        r#"{ "operation": "BIT_COUNT", "opValues": { "bin": "bit", "bitOffset": 20, "bitSize": 4 } }"#,
    )
    .unwrap();

    assert_eq!(
        convert_operations(&[envelope]),
        Ok(vec![Operation::Bit {
            bin: "bit".into(),
            op: BitOperation::Count {
                bit_offset: 20,
                bit_size: 4
            },
        }])
    );
}

#[test]
fn insert_bytes() {
    assert_eq!(
        convert(json!({
            "operation": "BIT_INSERT",
            "opValues": { "bin": "bit", "byteOffset": 1, "value": "Cw==" },
        })),
        Ok(Operation::Bit {
            bin: "bit".into(),
            op: BitOperation::Insert {
                byte_offset: 1,
                value: vec![11]
            },
        })
    );
}

#[rstest]
#[case(2147483647, Ok(2147483647))]
#[case(-2147483648, Ok(-2147483648))]
#[case(2147483648, Err(InvalidOperationError::TooLarge("index".into())))]
fn integer_width(#[case] index: i64, #[case] expected: Result<i32, InvalidOperationError>) {
    let result = convert(json!({
        "operation": "LIST_GET",
        "opValues": { "bin": "cards", "index": index },
    }));

    let index = result.map(|operation| match operation {
        Operation::List {
            op: ListOperation::Get(index),
            ..
        } => index,
        _ => panic!("expected list get operation"),
    });

    assert_eq!(index, expected);
}

#[test]
fn map_write_flags() {
    let operation = convert(json!({
        "operation": "MAP_PUT",
        "opValues": {
            "bin": "scores",
            "key": "panda",
            "value": 1,
            "mapPolicy": { "order": "UNORDERED", "writeFlags": ["CREATE_ONLY", "NO_FAIL"] },
        },
    }))
    .unwrap();

    match operation {
        Operation::Map {
            op: MapOperation::Put { policy, .. },
            ..
        } => assert_eq!(policy.write, operate_rs::cdt::MapWrite::Flags(5)),
        _ => panic!("expected map put operation"),
    }

    let result = convert(json!({
        "operation": "MAP_PUT",
        "opValues": {
            "bin": "scores",
            "key": "panda",
            "value": 1,
            "mapPolicy": { "order": "UNORDERED", "writeFlags": ["CREATE_ONLY", "NOPE"] },
        },
    }));

    assert!(matches!(
        result,
        Err(InvalidOperationError::UnknownWriteFlag { .. })
    ));
}

#[test]
fn nested_list_insert() {
    let operation = convert(json!({
        "operation": "LIST_INSERT",
        "opValues": {
            "bin": "cards",
            "index": 0,
            "value": { "b": 2, "a": 1 },
            "mapKey": "deck",
            "listIndexCreate": 3,
            "listPolicy": { "order": "ORDERED", "writeFlags": ["ADD_UNIQUE", "NO_FAIL"] },
        },
    }))
    .unwrap();

    assert_eq!(
        operation,
        Operation::List {
            bin: "cards".into(),
            context: Context::new(vec![
                ContextStep::ListIndexCreate {
                    index: 3,
                    order: ListOrder::Unordered,
                    pad: false
                },
                ContextStep::MapKey(Value::from("deck")),
            ]),
            op: ListOperation::Insert {
                index: 0,
                value: Value::Map(vec![
                    (Value::from("a"), Value::Int(1)),
                    (Value::from("b"), Value::Int(2)),
                ]),
                policy: ListPolicy::new(ListOrder::Ordered, 5),
            },
        }
    );
}

#[test]
fn create_steps_read_ordering_only_where_declared() {
    assert_eq!(
        convert(json!({
            "operation": "LIST_SIZE",
            "opValues": { "bin": "cards", "listIndexCreate": 0, "listOrder": "ORDERED" },
        })),
        Err(InvalidOperationError::IllegalKey("listOrder".into()))
    );
    assert_eq!(
        convert(json!({
            "operation": "MAP_SIZE",
            "opValues": { "bin": "scores", "mapKeyCreate": "panda", "mapOrder": "KEY_ORDERED" },
        })),
        Err(InvalidOperationError::IllegalKey("mapOrder".into()))
    );

    // Without the field the create step uses the default ordering
    let operation = convert(json!({
        "operation": "MAP_SIZE",
        "opValues": { "bin": "scores", "mapKeyCreate": "panda" },
    }))
    .unwrap();
    assert_eq!(
        operation.context(),
        Context::new(vec![ContextStep::MapKeyCreate {
            key: Value::from("panda"),
            order: MapOrder::Unordered
        }])
        .as_ref()
    );

    // A tag declaring the field shares it with its create step
    let operation = convert(json!({
        "operation": "MAP_CREATE",
        "opValues": { "bin": "scores", "mapKeyCreate": "panda", "mapOrder": "KEY_ORDERED" },
    }))
    .unwrap();
    assert_eq!(
        operation,
        Operation::Map {
            bin: "scores".into(),
            context: Context::new(vec![ContextStep::MapKeyCreate {
                key: Value::from("panda"),
                order: MapOrder::KeyOrdered
            }]),
            op: MapOperation::Create(MapOrder::KeyOrdered),
        }
    );
}

#[test]
fn unpadded_bytes() {
    assert_eq!(
        convert(json!({
            "operation": "BIT_INSERT",
            "opValues": { "bin": "bit", "byteOffset": 1, "value": "Cw" },
        })),
        Ok(Operation::Bit {
            bin: "bit".into(),
            op: BitOperation::Insert {
                byte_offset: 1,
                value: vec![11]
            },
        })
    );
}

#[rstest]
#[case(json!(true), true)]
#[case(json!("true"), true)]
#[case(json!("yes"), false)]
#[case(json!(false), false)]
fn inverted_return_types(#[case] inverted: serde_json::Value, #[case] expected: bool) {
    let operation = convert(json!({
        "operation": "LIST_REMOVE_BY_RANK",
        "opValues": {
            "bin": "cards",
            "rank": -1,
            "listReturnType": "COUNT",
            "inverted": inverted,
        },
    }))
    .unwrap();

    let return_type = match operation {
        Operation::List {
            op: ListOperation::RemoveBy(ListSelector::Rank(-1), return_type),
            ..
        } => return_type,
        _ => panic!("expected list remove by rank operation"),
    };

    assert_eq!(return_type.is_inverted(), expected);
    assert_eq!(return_type.base(), ListReturnType::Count.code());

    // Inverting twice gives back the original code
    assert_eq!(return_type.inverted().inverted(), return_type);
    assert_eq!(
        return_type.inverted().code(),
        ReturnType::from(ListReturnType::Count).code() | if expected { 0 } else { INVERTED }
    );
}

#[test]
fn binary_map_envelope() {
    let value = Cbor::Map(vec![
        (
            Cbor::Text("operation".into()),
            Cbor::Text("LIST_APPEND".into()),
        ),
        (
            Cbor::Text("opValues".into()),
            Cbor::Map(vec![
                (Cbor::Text("bin".into()), Cbor::Text("cards".into())),
                (Cbor::Text("value".into()), Cbor::Bytes(vec![1, 2, 3])),
            ]),
        ),
    ]);

    let mut bytes = Vec::new();
    ciborium::ser::into_writer(&value, &mut bytes).unwrap();
    let envelope: PlainOperation = ciborium::de::from_reader(&bytes[..]).unwrap();

    assert_eq!(
        convert_operation(&envelope),
        Ok(Operation::List {
            bin: "cards".into(),
            context: None,
            op: ListOperation::Append(Value::Blob(vec![1, 2, 3])),
        })
    );
}

#[test]
fn every_tag_has_a_schema() {
    for tag in OperationTag::ALL {
        assert!(tag.schema().is_some(), "{} has no schema", tag);
    }

    let schema = OperationTag::ListGetByValueRange.schema().unwrap();
    assert_eq!(schema.required(), &["bin", "listReturnType"]);
    assert_eq!(schema.optional(), &["valueBegin", "valueEnd", "inverted"]);
}

#[test]
fn batches_keep_their_order() {
    let envelopes: Vec<PlainOperation> = serde_json::from_value(json!([
        { "operation": "TOUCH", "opValues": {} },
        { "operation": "MAP_CLEAR", "opValues": { "bin": "scores" } },
        { "operation": "DELETE", "opValues": {} },
    ]))
    .unwrap();

    assert_eq!(
        convert_operations(&envelopes),
        Ok(vec![
            Operation::Touch,
            Operation::Map {
                bin: "scores".into(),
                context: None,
                op: MapOperation::Clear,
            },
            Operation::Delete,
        ])
    );
}
