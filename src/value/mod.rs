// SPDX-License-Identifier: AGPL-3.0-or-later

//! Typed values handed to the store.
mod bin;
#[allow(clippy::module_inception)]
mod value;

pub use bin::Bin;
pub use value::{HllValue, Value};
