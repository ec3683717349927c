// SPDX-License-Identifier: AGPL-3.0-or-later

//! This module provides tools which can be used for testing.
//!
//! It includes `rstest` fixtures for envelopes and field bags, sample values for every field of
//! the wire vocabulary and a logging setup for tests.
pub mod constants;
pub mod fixtures;
pub mod utils;

pub use utils::setup_logging;
