// SPDX-License-Identifier: AGPL-3.0-or-later

//! Untyped input model: values, field bags and operation envelopes as they come out of a JSON or
//! binary map decoder.
pub mod error;
mod plain_fields;
mod plain_operation;
mod plain_value;

pub use plain_fields::{FieldName, PlainFields};
pub use plain_operation::{PlainOperation, OPERATION_FIELD, OP_VALUES_FIELD};
pub use plain_value::PlainValue;
