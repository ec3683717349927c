// SPDX-License-Identifier: AGPL-3.0-or-later

//! One builder per operation tag, turning an already validated field bag into a typed operation.
//!
//! Builders only coerce values, the field schema of the tag has been checked before they run.
#![allow(missing_docs)]

pub mod bit;
pub mod hll;
pub mod list;
pub mod map;
pub mod record;

use crate::convert::error::InvalidOperationError;
use crate::operation::Operation;
use crate::plain::PlainFields;

/// Signature of all operation builders.
pub type BuildFn = fn(&PlainFields) -> Result<Operation, InvalidOperationError>;
