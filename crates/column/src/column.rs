// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use stratum_type::{DecodeError, EncodeError, TypeCodec};
use tracing::instrument;

use crate::name;

/// A logical column value cell, which in most cases is different from a
/// storage engine column.
///
/// Immutable once built: both the encoded payload and the decoded value
/// are fixed at construction and codec-consistent with each other, so a
/// cell can be shared and read concurrently without synchronization. The
/// codec is owned by the schema layer and merely borrowed here through an
/// `Arc`; it outlives every cell built with it.
pub struct Column<T> {
	/// Base column name.
	name: String,

	/// Per-entry suffix, set only for cells derived from one entry of a
	/// multi-valued source column (one per map key).
	suffix: Option<String>,

	/// Canonical encoded payload, as produced and consumed by the
	/// owning storage format.
	encoded: Vec<u8>,

	/// Decoded logical value.
	value: T,

	codec: Arc<dyn TypeCodec<T>>,

	/// Whether the source column may contribute zero or more cells per
	/// record, as opposed to exactly one.
	multi_valued: bool,
}

impl<T> Column<T> {
	fn new(
		name: String,
		suffix: Option<String>,
		encoded: Vec<u8>,
		value: T,
		codec: Arc<dyn TypeCodec<T>>,
		multi_valued: bool,
	) -> Self {
		debug_assert!(!name.is_empty(), "column base name must not be empty");
		Self {
			name,
			suffix,
			encoded,
			value,
			codec,
			multi_valued,
		}
	}

	/// Builds a cell from the storage engine's encoded payload.
	///
	/// The codec decodes the payload; both forms are stored. Fails when
	/// the payload is malformed or mismatches the codec's type, in
	/// which case no cell is observable.
	#[instrument(name = "column::from_encoded", level = "trace", skip_all)]
	pub fn from_encoded(
		name: impl Into<String>,
		suffix: Option<String>,
		encoded: Vec<u8>,
		codec: Arc<dyn TypeCodec<T>>,
		multi_valued: bool,
	) -> Result<Self, DecodeError> {
		let value = codec.decode(&encoded)?;
		Ok(Self::new(name.into(), suffix, encoded, value, codec, multi_valued))
	}

	/// Builds a cell from an already decoded value.
	///
	/// The codec encodes the value; both forms are stored. Fails when
	/// the value is not representable in the target encoding.
	#[instrument(name = "column::from_value", level = "trace", skip_all)]
	pub fn from_value(
		name: impl Into<String>,
		suffix: Option<String>,
		value: T,
		codec: Arc<dyn TypeCodec<T>>,
		multi_valued: bool,
	) -> Result<Self, EncodeError> {
		let encoded = codec.encode(&value)?;
		Ok(Self::new(name.into(), suffix, encoded, value, codec, multi_valued))
	}

	/// The base column name, without any suffix.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The per-entry suffix, if this cell came from a multi-valued
	/// column entry.
	pub fn suffix(&self) -> Option<&str> {
		self.suffix.as_deref()
	}

	/// The canonical encoded payload.
	pub fn encoded(&self) -> &[u8] {
		&self.encoded
	}

	/// The decoded logical value.
	pub fn value(&self) -> &T {
		&self.value
	}

	/// Consumes the cell and returns the decoded value.
	pub fn into_value(self) -> T {
		self.value
	}

	/// The codec defining this cell's round-trip and ordering.
	pub fn codec(&self) -> &Arc<dyn TypeCodec<T>> {
		&self.codec
	}

	pub fn is_multi_valued(&self) -> bool {
		self.multi_valued
	}

	/// The full name: the base name, suffixed when this cell came from
	/// a multi-valued column entry.
	pub fn full_name(&self) -> String {
		name::full_name(&self.name, self.suffix.as_deref())
	}

	/// Applies this cell's suffix convention to a caller-supplied base
	/// name instead of the stored one.
	pub fn full_name_for(&self, base: &str) -> String {
		name::full_name(base, self.suffix.as_deref())
	}

	/// Orders this cell against another through the encoded payloads,
	/// delegated entirely to this cell's codec. Decoded values are
	/// never compared directly: the codec's byte order is the storage
	/// engine's order, which is what the index relies on.
	pub fn compare<U>(&self, other: &Column<U>) -> Ordering {
		self.codec.compare(&self.encoded, &other.encoded)
	}

	/// Orders this cell against a possibly absent counterpart: a cell
	/// is always strictly greater than no cell.
	pub fn compare_opt<U>(&self, other: Option<&Column<U>>) -> Ordering {
		match other {
			None => Ordering::Greater,
			Some(other) => self.compare(other),
		}
	}
}

impl<T: Clone> Clone for Column<T> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			suffix: self.suffix.clone(),
			encoded: self.encoded.clone(),
			value: self.value.clone(),
			codec: Arc::clone(&self.codec),
			multi_valued: self.multi_valued,
		}
	}
}

// Cells of the same logical type form a total order under their shared
// codec, so index builds can sort them directly.
impl<T> PartialEq for Column<T> {
	fn eq(&self, other: &Self) -> bool {
		self.compare(other) == Ordering::Equal
	}
}

impl<T> Eq for Column<T> {}

impl<T> PartialOrd for Column<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.compare(other))
	}
}

impl<T> Ord for Column<T> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.compare(other)
	}
}

// Diagnostics only; never identity.
impl<T: Debug> Display for Column<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Column {{ full_name: {}, value: {:?}, type: {} }}",
			self.full_name(),
			self.value,
			self.codec.ty()
		)
	}
}

impl<T: Debug> Debug for Column<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(self, f)
	}
}
