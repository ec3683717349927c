// SPDX-License-Identifier: AGPL-3.0-or-later

//! Helpers for composing field bags. Unlike the fixtures these can be used outside of `rstest`
//! methods.
use crate::operation::{OperationKind, OperationTag};
use crate::plain::PlainValue;
use crate::test_utils::constants::{BASE64_BYTES, BIN_NAME};

/// Initialises logging for tests when `RUST_LOG` is set.
///
/// Calling this more than once is fine.
pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = pretty_env_logger::try_init();
    }
}

/// Returns a valid sample value for a field of the given operation.
pub fn sample_value(tag: OperationTag, name: &str) -> PlainValue {
    match name {
        "bin" => BIN_NAME.into(),
        "value" => match tag {
            OperationTag::BitAdd | OperationTag::BitSubtract | OperationTag::BitSetInt => {
                1.into()
            }
            OperationTag::BitLscan | OperationTag::BitRscan => true.into(),
            _ if tag.kind() == OperationKind::Bit => BASE64_BYTES.into(),
            _ => "bamboo".into(),
        },
        "values" => PlainValue::Array(vec![BASE64_BYTES.into()]),
        "key" | "keyBegin" | "keyEnd" | "valueBegin" | "valueEnd" => "bamboo".into(),
        "keys" => PlainValue::Array(vec!["bamboo".into()]),
        "map" => PlainValue::Map(vec![("bamboo".into(), 1.into())]),
        "listReturnType" => "VALUE".into(),
        "mapReturnType" => "KEY_VALUE".into(),
        "listOrder" => "ORDERED".into(),
        "mapOrder" => "KEY_ORDERED".into(),
        "listSortFlags" => "DROP_DUPLICATES".into(),
        "bitOverflowAction" => "saturate".into(),
        "listPolicy" | "mapPolicy" => PlainValue::Map(vec![("order".into(), "UNORDERED".into())]),
        "inverted" | "pad" | "signed" => true.into(),
        // Every other field is an integer
        _ => 1.into(),
    }
}

/// Returns sample values for all required fields of an operation.
pub fn required_op_values(tag: OperationTag) -> Vec<(&'static str, PlainValue)> {
    tag.schema()
        .map(|schema| {
            schema
                .required()
                .iter()
                .map(|name| (*name, sample_value(tag, name)))
                .collect()
        })
        .unwrap_or_default()
}

/// Returns sample values for all required and optional fields of an operation.
pub fn all_op_values(tag: OperationTag) -> Vec<(&'static str, PlainValue)> {
    tag.schema()
        .map(|schema| {
            schema
                .allowed()
                .map(|name| (name, sample_value(tag, name)))
                .collect()
        })
        .unwrap_or_default()
}
