// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use stratum_type::{
	BlobCodec, BooleanCodec, DEFAULT_NANOS_PER_MONTH, Float8Codec, Int8Codec, IntervalCodec, Type, Utf8Codec,
};
use tracing::instrument;

/// A field-to-column mapping rule, one variant per logical type.
///
/// The wire form is JSON with a `type` discriminator, so a persisted
/// schema reads as `{"type": "duration", "nanos_per_month": 1000}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mapper {
	Boolean(BooleanMapper),
	Bigint(BigintMapper),
	Double(DoubleMapper),
	Text(TextMapper),
	Blob(BlobMapper),
	Duration(DurationMapper),
}

impl Mapper {
	/// The logical type the mapped cells decode into.
	pub fn ty(&self) -> Type {
		match self {
			Mapper::Boolean(_) => Type::Boolean,
			Mapper::Bigint(_) => Type::Int8,
			Mapper::Double(_) => Type::Float8,
			Mapper::Text(_) => Type::Utf8,
			Mapper::Blob(_) => Type::Blob,
			Mapper::Duration(_) => Type::Interval,
		}
	}

	/// The source column override, when the mapped field is not named
	/// after the column it reads.
	pub fn column(&self) -> Option<&str> {
		match self {
			Mapper::Boolean(mapper) => mapper.column.as_deref(),
			Mapper::Bigint(mapper) => mapper.column.as_deref(),
			Mapper::Double(mapper) => mapper.column.as_deref(),
			Mapper::Text(mapper) => mapper.column.as_deref(),
			Mapper::Blob(mapper) => mapper.column.as_deref(),
			Mapper::Duration(mapper) => mapper.column.as_deref(),
		}
	}
}

macro_rules! single_column_mapper {
	($(#[$meta:meta])* $name:ident => $codec:ty, $build:expr) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
		pub struct $name {
			/// Source column override; defaults to the field name.
			#[serde(skip_serializing_if = "Option::is_none")]
			pub column: Option<String>,
		}

		impl $name {
			pub fn column(mut self, column: impl Into<String>) -> Self {
				self.column = Some(column.into());
				self
			}

			/// Resolves this mapping to its codec.
			#[instrument(level = "trace", skip(self))]
			pub fn codec(&self) -> Arc<$codec> {
				Arc::new($build)
			}
		}
	};
}

single_column_mapper! {
	/// Maps a boolean field.
	BooleanMapper => BooleanCodec, BooleanCodec
}

single_column_mapper! {
	/// Maps an 8-byte signed integer field.
	BigintMapper => Int8Codec, Int8Codec
}

single_column_mapper! {
	/// Maps an 8-byte floating point field.
	DoubleMapper => Float8Codec, Float8Codec
}

single_column_mapper! {
	/// Maps a text field.
	TextMapper => Utf8Codec, Utf8Codec
}

single_column_mapper! {
	/// Maps a binary field.
	BlobMapper => BlobCodec, BlobCodec
}

/// Maps a time duration.
///
/// `nanos_per_month` fixes how calendar months fold into the ordering;
/// when unset, a thirty-day month is assumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationMapper {
	/// Source column override; defaults to the field name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub column: Option<String>,

	/// The number of nanoseconds in a month.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub nanos_per_month: Option<i64>,
}

impl DurationMapper {
	pub fn column(mut self, column: impl Into<String>) -> Self {
		self.column = Some(column.into());
		self
	}

	/// Sets the number of nanoseconds in a month.
	pub fn nanos_per_month(mut self, nanos_per_month: i64) -> Self {
		self.nanos_per_month = Some(nanos_per_month);
		self
	}

	/// Resolves this mapping to its codec.
	#[instrument(name = "schema::duration::codec", level = "trace", skip(self), fields(nanos_per_month = ?self.nanos_per_month))]
	pub fn codec(&self) -> Arc<IntervalCodec> {
		Arc::new(IntervalCodec::new(self.nanos_per_month.unwrap_or(DEFAULT_NANOS_PER_MONTH)))
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_mapper_json_round_trip() {
		let mapper = Mapper::Duration(DurationMapper::default().column("lifespan").nanos_per_month(1_000));
		let json = serde_json::to_string(&mapper).unwrap();
		assert_eq!(json, "{\"type\":\"duration\",\"column\":\"lifespan\",\"nanos_per_month\":1000}");

		let recovered: Mapper = serde_json::from_str(&json).unwrap();
		assert_eq!(recovered, mapper);
	}

	#[test]
	fn test_unset_fields_are_omitted() {
		let mapper = Mapper::Text(TextMapper::default());
		assert_eq!(serde_json::to_string(&mapper).unwrap(), "{\"type\":\"text\"}");
	}

	#[test]
	fn test_mapper_types() {
		assert_eq!(Mapper::Boolean(BooleanMapper::default()).ty(), Type::Boolean);
		assert_eq!(Mapper::Bigint(BigintMapper::default()).ty(), Type::Int8);
		assert_eq!(Mapper::Duration(DurationMapper::default()).ty(), Type::Interval);
	}

	#[test]
	fn test_column_override() {
		let mapper = Mapper::Bigint(BigintMapper::default().column("user_id"));
		assert_eq!(mapper.column(), Some("user_id"));
		assert_eq!(Mapper::Bigint(BigintMapper::default()).column(), None);
	}

	#[test]
	fn test_duration_mapper_resolves_configured_constant() {
		let codec = DurationMapper::default().nanos_per_month(42).codec();
		assert_eq!(codec.nanos_per_month(), 42);

		let codec = DurationMapper::default().codec();
		assert_eq!(codec.nanos_per_month(), DEFAULT_NANOS_PER_MONTH);
	}
}
