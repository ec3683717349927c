// SPDX-License-Identifier: AGPL-3.0-or-later

//! `rstest` fixtures which can be injected into tests.
//!
//! All fixtures can optionally be passed custom parameters which override the default values.
use rstest::fixture;

use crate::plain::{PlainFields, PlainOperation, PlainValue};
use crate::test_utils::constants::{BIN_NAME, OPERATION_TAG};

/// Fixture which injects the default bin name into a test method.
#[fixture]
pub fn bin_name() -> String {
    BIN_NAME.to_owned()
}

/// Fixture which injects a field bag with the default bin name and the given values.
#[fixture]
pub fn op_values(
    #[default(vec![])] values: Vec<(&'static str, PlainValue)>,
) -> Vec<(&'static str, PlainValue)> {
    let mut op_values = vec![("bin", PlainValue::from(BIN_NAME))];
    op_values.extend(values);
    op_values
}

/// Fixture which injects a field bag into a test method.
#[fixture]
pub fn plain_fields(op_values: Vec<(&'static str, PlainValue)>) -> PlainFields {
    PlainFields::from(op_values)
}

/// Fixture which injects an operation envelope into a test method.
///
/// Defaults to a `LIST_SIZE` operation on the default bin.
#[fixture]
pub fn plain_operation(
    #[default(OPERATION_TAG)] tag: &'static str,
    op_values: Vec<(&'static str, PlainValue)>,
) -> PlainOperation {
    PlainOperation::new(tag, op_values).unwrap()
}
