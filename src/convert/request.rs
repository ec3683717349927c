// SPDX-License-Identifier: AGPL-3.0-or-later

//! Structural checks of an operation envelope, before its field bag is looked at.
use std::convert::TryFrom;

use crate::convert::error::InvalidOperationError;
use crate::convert::schema::require_keys;
use crate::operation::OperationTag;
use crate::plain::{PlainFields, PlainOperation, PlainValue, OPERATION_FIELD, OP_VALUES_FIELD};

/// Operation tag and field bag of a structurally valid envelope.
///
/// The field bag has not been checked against the schema of the tag yet.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationRequest {
    tag: OperationTag,
    fields: PlainFields,
}

impl OperationRequest {
    /// Returns a new request for the given tag and field bag.
    pub fn new(tag: OperationTag, fields: PlainFields) -> Self {
        Self { tag, fields }
    }

    /// Returns the operation tag.
    pub fn tag(&self) -> OperationTag {
        self.tag
    }

    /// Returns the field bag.
    pub fn fields(&self) -> &PlainFields {
        &self.fields
    }
}

impl TryFrom<&PlainOperation> for OperationRequest {
    type Error = InvalidOperationError;

    /// Checks the envelope has exactly the tag and field bag entries and that both have the
    /// expected type.
    fn try_from(envelope: &PlainOperation) -> Result<Self, Self::Error> {
        require_keys(envelope.fields(), &[OPERATION_FIELD, OP_VALUES_FIELD])?;
        restrict_envelope_keys(envelope.fields())?;

        let tag = match envelope.get(OPERATION_FIELD) {
            Some(PlainValue::String(name)) => name
                .parse::<OperationTag>()
                .map_err(|_| InvalidOperationError::UnknownOperation(name.to_owned()))?,
            _ => return Err(InvalidOperationError::invalid_type(OPERATION_FIELD, "a string")),
        };

        let fields = match envelope.get(OP_VALUES_FIELD) {
            Some(value @ PlainValue::Map(_)) => PlainFields::try_from(value)
                .map_err(|_| InvalidOperationError::invalid_type(OP_VALUES_FIELD, "a map"))?,
            _ => return Err(InvalidOperationError::invalid_type(OP_VALUES_FIELD, "a map")),
        };

        Ok(Self { tag, fields })
    }
}

/// Addressing fields belong into the field bag, the envelope itself only carries two entries.
fn restrict_envelope_keys(fields: &PlainFields) -> Result<(), InvalidOperationError> {
    match fields
        .names()
        .find(|name| *name != OPERATION_FIELD && *name != OP_VALUES_FIELD)
    {
        Some(illegal) => Err(InvalidOperationError::IllegalKey(illegal.to_owned())),
        None => Ok(()),
    }
}
