// SPDX-License-Identifier: AGPL-3.0-or-later

//! Typed operations handed to the store client, and the closed set of operation tags requests
//! can name.
mod bit;
mod hll;
mod list;
mod map;
#[allow(clippy::module_inception)]
mod operation;
mod tag;

pub use bit::BitOperation;
pub use hll::{HllOperation, UNSET_BIT_COUNT};
pub use list::{ListOperation, ListSelector};
pub use map::{MapOperation, MapSelector};
pub use operation::Operation;
pub use tag::{OperationKind, OperationTag};
