// SPDX-License-Identifier: AGPL-3.0-or-later

//! Conversion of operation envelopes into typed store operations.
//!
//! Converting an envelope happens in three steps:
//!
//! 1. The envelope is checked for its two entries, the operation tag and the field bag, which
//!    gives an [`OperationRequest`](request::OperationRequest)
//! 2. The field bag is validated against the [`FieldSchema`](schema::FieldSchema) of the tag
//! 3. The builder of the tag coerces all fields and composes the typed [`Operation`]
//!
//! Every step stops at the first problem it finds and reports it as an
//! [`InvalidOperationError`].
pub mod builders;
pub mod coerce;
pub mod context;
pub mod error;
pub mod flags;
pub mod keys;
pub mod policy;
pub mod registry;
pub mod request;
pub mod schema;

use std::convert::TryFrom;

use log::debug;

use crate::convert::error::InvalidOperationError;
use crate::convert::request::OperationRequest;
use crate::operation::Operation;
use crate::plain::PlainOperation;

/// Converts a single operation envelope into a typed operation.
pub fn convert_operation(envelope: &PlainOperation) -> Result<Operation, InvalidOperationError> {
    let result = OperationRequest::try_from(envelope)
        .and_then(|request| registry::dispatch(request.tag(), request.fields()));

    if let Err(err) = &result {
        debug!("Rejected operation: {}", err);
    }

    result
}

/// Converts an ordered list of envelopes, failing on the first invalid one.
///
/// Either every envelope converts and the typed operations are returned in the same order, or
/// the error of the first invalid envelope is returned.
pub fn convert_operations(
    envelopes: &[PlainOperation],
) -> Result<Vec<Operation>, InvalidOperationError> {
    envelopes.iter().map(convert_operation).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use crate::convert::error::InvalidOperationError;
    use crate::operation::{ListOperation, Operation};
    use crate::plain::PlainOperation;
    use crate::test_utils::fixtures::plain_operation;

    use super::{convert_operation, convert_operations};

    fn envelope(json: serde_json::Value) -> PlainOperation {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn convert_single() {
        let operation = convert_operation(&envelope(json!({
            "operation": "LIST_CLEAR",
            "opValues": { "bin": "cards", "listIndex": 0 },
        })))
        .unwrap();

        assert!(matches!(
            operation,
            Operation::List {
                op: ListOperation::Clear,
                context: Some(_),
                ..
            }
        ));
    }

    #[rstest]
    fn default_envelope(plain_operation: PlainOperation) {
        assert_eq!(
            convert_operation(&plain_operation),
            Ok(Operation::List {
                bin: "panda".into(),
                context: None,
                op: ListOperation::Size,
            })
        );
    }

    #[rstest]
    fn envelope_with_unknown_tag(#[with("LIST_FROBNICATE")] plain_operation: PlainOperation) {
        assert_eq!(
            convert_operation(&plain_operation),
            Err(InvalidOperationError::UnknownOperation("LIST_FROBNICATE".into()))
        );
    }

    #[test]
    fn batch_fails_fast() {
        let envelopes = vec![
            envelope(json!({ "operation": "LIST_CLEAR", "opValues": { "bin": "cards" } })),
            envelope(json!({ "operation": "LIST_CLEAR", "opValues": {} })),
            envelope(json!({ "operation": "LIST_NOPE", "opValues": {} })),
        ];

        assert_eq!(
            convert_operations(&envelopes),
            Err(InvalidOperationError::MissingKey("bin".into()))
        );
        assert_eq!(convert_operations(&envelopes[..1]).unwrap().len(), 1);
        assert_eq!(convert_operations(&[]), Ok(vec![]));
    }
}
