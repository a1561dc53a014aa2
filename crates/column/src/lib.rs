// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

//! The value cell bridging a storage engine's encoded column values and
//! the decoded values the indexing layer operates on.
//!
//! A [`Column`] is an immutable pairing of a name, an encoded payload, the
//! decoded value it round-trips with, and a shared codec that defines both
//! the round-trip and the binary ordering. Cells derived from multi-valued
//! source columns (maps, sets) carry a suffix that [`Column::full_name`]
//! joins to the base name with [`MAP_SEPARATOR`]; [`separate_map_keys`] is
//! the inverse.

mod column;
mod name;

pub use column::Column;
pub use name::{MAP_SEPARATOR, separate_map_keys};
