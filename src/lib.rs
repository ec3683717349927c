// SPDX-License-Identifier: AGPL-3.0-or-later

//! # operate-rs
//!
//! Turns loosely-typed operation requests into the strongly-typed operations of a record-oriented
//! key-value store.
//!
//! Requests arrive as envelopes of the form `{ operation: <tag>, opValues: <field bag> }` which
//! were already decoded from JSON or a binary map encoding into [`plain`] values. The engine in
//! [`convert`] checks every field bag against the declared schema of its operation tag, coerces
//! the untyped values into the types the store expects and returns a fully resolved
//! [`operation::Operation`]. Nothing is executed here, the result is handed to a store client.
//!
//! ```text
//!  ┌──────────────┐      ┌────────────────┐      ┌─────────┐
//!  │PlainOperation├─────►│OperationRequest├─────►│Operation│
//!  └──────────────┘      └────────────────┘      └─────────┘
//!     envelope             tag + field bag         typed, store-ready
//! ```
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use operate_rs::convert::convert_operations;
//! use operate_rs::operation::{BitOperation, Operation};
//! use operate_rs::plain::PlainOperation;
//!
//! let envelope: PlainOperation = serde_json::from_str(
//!     r#"{ "operation": "BIT_COUNT", "opValues": { "bin": "bit", "bitOffset": 20, "bitSize": 4 } }"#,
//! )?;
//!
//! let operations = convert_operations(&[envelope])?;
//!
//! assert_eq!(
//!     operations[0],
//!     Operation::Bit {
//!         bin: "bit".into(),
//!         op: BitOperation::Count { bit_offset: 20, bit_size: 4 },
//!     }
//! );
//! # Ok(())
//! # }
//! ```
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

#[macro_use]
mod macros;

pub mod cdt;
pub mod convert;
pub mod operation;
pub mod plain;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod value;
