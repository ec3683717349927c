// SPDX-License-Identifier: AGPL-3.0-or-later

//! Closed-world field validation.
//!
//! Every operation tag declares which fields it requires and which it optionally accepts. A field
//! bag is rejected when a required field is missing or when it contains a field which is neither
//! declared nor one of the addressing fields.
use crate::convert::error::InvalidOperationError;
use crate::convert::keys;
use crate::plain::PlainFields;

/// Required and optional fields of an operation tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSchema {
    required: &'static [&'static str],
    optional: &'static [&'static str],
}

impl FieldSchema {
    /// Returns a new schema.
    pub const fn new(required: &'static [&'static str], optional: &'static [&'static str]) -> Self {
        Self { required, optional }
    }

    /// Fields which need to be present, in declaration order.
    pub fn required(&self) -> &'static [&'static str] {
        self.required
    }

    /// Fields which may be present in addition to the required ones.
    pub fn optional(&self) -> &'static [&'static str] {
        self.optional
    }

    /// Iterates over all declared fields, required ones first.
    pub fn allowed(&self) -> impl Iterator<Item = &'static str> {
        self.required.iter().chain(self.optional.iter()).copied()
    }

    /// Checks a field bag against this schema.
    ///
    /// Missing fields are reported before illegal ones.
    pub fn validate(&self, fields: &PlainFields) -> Result<(), InvalidOperationError> {
        require_keys(fields, self.required)?;
        let allowed: Vec<&str> = self.allowed().collect();
        restrict_keys(fields, &allowed)?;
        Ok(())
    }
}

/// Fails with the first key, in the given order, which is missing from the bag.
pub fn require_keys(fields: &PlainFields, keys: &[&str]) -> Result<(), InvalidOperationError> {
    match keys.iter().find(|key| !fields.contains(key)) {
        Some(missing) => Err(InvalidOperationError::MissingKey((*missing).to_owned())),
        None => Ok(()),
    }
}

/// Fails with the first field of the bag which is neither allowed nor an addressing field.
///
/// Ordering fields of create steps (`listOrder`, `pad`, `mapOrder`) are no exception: they are
/// only accepted by tags which declare them.
pub fn restrict_keys(fields: &PlainFields, allowed: &[&str]) -> Result<(), InvalidOperationError> {
    let is_allowed = |name: &str| allowed.contains(&name) || keys::ADDRESSING.contains(&name);

    match fields.names().find(|name| !is_allowed(name)) {
        Some(illegal) => Err(InvalidOperationError::IllegalKey(illegal.to_owned())),
        None => Ok(()),
    }
}
