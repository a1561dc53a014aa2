// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A tag naming the logical type a codec decodes into.
///
/// Cheap to store and copy; carried inside error values and diagnostics to
/// name the codec that produced them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// An 8-byte signed integer.
	Int8,
	/// An 8-byte unsigned integer.
	Uint8,
	/// An 8-byte floating point.
	Float8,
	/// A UTF-8 encoded text.
	Utf8,
	/// A binary large object.
	Blob,
	/// A calendar-aware duration (months, days, nanoseconds).
	Interval,
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("boolean"),
			Type::Int8 => f.write_str("int8"),
			Type::Uint8 => f.write_str("uint8"),
			Type::Float8 => f.write_str("float8"),
			Type::Utf8 => f.write_str("utf8"),
			Type::Blob => f.write_str("blob"),
			Type::Interval => f.write_str("interval"),
		}
	}
}
