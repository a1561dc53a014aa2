// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

//! Declarative schema mappers.
//!
//! A mapper is configuration-time metadata describing how one schema field
//! maps to value cells: which codec decodes it and the per-type parameters
//! that codec needs (the duration mapper's `nanos_per_month`, for
//! instance). Mappers are plain serde DTOs — they carry no algorithmic
//! content and are interpreted only when resolved to a codec.

mod mapper;

pub use mapper::{
	BigintMapper, BlobMapper, BooleanMapper, DoubleMapper, DurationMapper, Mapper, TextMapper,
};
