// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::cdt::{ListOrder, MapOrder, MapWriteMode};

/// Write policy of a list bin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListPolicy {
    /// Ordering the list is created with.
    pub order: ListOrder,

    /// Bitmask of `ListWriteFlags`.
    pub flags: i32,
}

impl ListPolicy {
    /// Returns a new list policy.
    pub fn new(order: ListOrder, flags: i32) -> Self {
        Self { order, flags }
    }
}

/// Write semantics of a map policy.
///
/// The store either takes a bitmask of write flags or one of the legacy write modes, never both.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MapWrite {
    /// Bitmask of `MapWriteFlags`.
    Flags(i32),

    /// Legacy write mode.
    Mode(MapWriteMode),
}

impl Default for MapWrite {
    fn default() -> Self {
        MapWrite::Flags(0)
    }
}

/// Write policy of a map bin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MapPolicy {
    /// Ordering the map is created with.
    pub order: MapOrder,

    /// Write flags or write mode.
    pub write: MapWrite,
}

impl MapPolicy {
    /// Returns a map policy with write flags.
    pub fn with_flags(order: MapOrder, flags: i32) -> Self {
        Self {
            order,
            write: MapWrite::Flags(flags),
        }
    }

    /// Returns a map policy with a legacy write mode.
    pub fn with_mode(order: MapOrder, mode: MapWriteMode) -> Self {
        Self {
            order,
            write: MapWrite::Mode(mode),
        }
    }
}
