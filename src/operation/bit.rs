// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::cdt::BitOverflowAction;

/// Operation on a byte blob bin. Offsets and sizes are counted in bits unless named otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum BitOperation {
    Resize {
        byte_size: i32,
        resize_flags: i32,
    },
    Insert {
        byte_offset: i32,
        value: Vec<u8>,
    },
    Remove {
        byte_offset: i32,
        byte_size: i32,
    },
    Set {
        bit_offset: i32,
        bit_size: i32,
        value: Vec<u8>,
    },
    Or {
        bit_offset: i32,
        bit_size: i32,
        value: Vec<u8>,
    },
    Xor {
        bit_offset: i32,
        bit_size: i32,
        value: Vec<u8>,
    },
    And {
        bit_offset: i32,
        bit_size: i32,
        value: Vec<u8>,
    },
    Not {
        bit_offset: i32,
        bit_size: i32,
    },
    Lshift {
        bit_offset: i32,
        bit_size: i32,
        shift: i32,
    },
    Rshift {
        bit_offset: i32,
        bit_size: i32,
        shift: i32,
    },
    Add {
        bit_offset: i32,
        bit_size: i32,
        value: i64,
        signed: bool,
        action: BitOverflowAction,
    },
    Subtract {
        bit_offset: i32,
        bit_size: i32,
        value: i64,
        signed: bool,
        action: BitOverflowAction,
    },
    SetInt {
        bit_offset: i32,
        bit_size: i32,
        value: i64,
    },
    Get {
        bit_offset: i32,
        bit_size: i32,
    },
    Count {
        bit_offset: i32,
        bit_size: i32,
    },
    /// Position of the first bit equal to `value`, scanning from the left.
    Lscan {
        bit_offset: i32,
        bit_size: i32,
        value: bool,
    },
    /// Position of the first bit equal to `value`, scanning from the right.
    Rscan {
        bit_offset: i32,
        bit_size: i32,
        value: bool,
    },
    GetInt {
        bit_offset: i32,
        bit_size: i32,
        signed: bool,
    },
}
