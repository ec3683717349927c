// SPDX-License-Identifier: AGPL-3.0-or-later

//! Constants used across the test_utils module for default values.

/// Default bin name used in all fixtures.
pub const BIN_NAME: &str = "panda";

/// Default operation tag of the envelope fixture.
pub const OPERATION_TAG: &str = "LIST_SIZE";

/// Base64 encoding of the single byte `11`.
pub const BASE64_BYTES: &str = "Cw==";

/// Contents of the byte blob bin used by the bit counting scenario, bits 20 to 23 hold three set
/// bits.
pub const BIT_BLOB: [u8; 4] = [12, 5, 110, 47];

/// Largest integer which fits into a 32-bit integer field.
pub const MAX_INT: i64 = i32::MAX as i64;
