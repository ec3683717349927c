// SPDX-License-Identifier: AGPL-3.0-or-later

//! Enumerations, policies and addressing paths of the store's collection data types.
//!
//! Symbolic names (`"KEY_ORDERED"`, `"NO_FAIL"`, ..) are parsed with `FromStr`, the numeric codes
//! the store expects are returned by `code()`.
mod context;
pub mod error;
mod flags;
mod order;
mod policy;
mod return_type;

pub use context::{Context, ContextStep};
pub use flags::{BitOverflowAction, ListSortFlags, ListWriteFlags, MapWriteFlags, MapWriteMode};
pub use order::{ListOrder, MapOrder};
pub use policy::{ListPolicy, MapPolicy, MapWrite};
pub use return_type::{ListReturnType, MapReturnType, ReturnType, INVERTED};
