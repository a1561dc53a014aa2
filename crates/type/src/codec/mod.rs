// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

//! Binary codecs for logical column values.
//!
//! Each codec knows three things about its logical type: how to decode the
//! storage engine's encoded bytes into a value, how to encode a value back
//! to the exact same bytes, and how two encoded payloads order. The byte
//! ordering a codec defines is the ordering contract the indexing layer
//! relies on for range scans and merges, so `compare` must be a total
//! order and must agree with the decoded type's natural order wherever one
//! exists.
//!
//! The fixed-width codecs use the key encodings of the storage layer:
//! big-endian with the sign bit flipped for signed integers, and the IEEE
//! total-order bit trick for floats, so that plain memcmp over the encoded
//! bytes equals numeric order.

use std::cmp::Ordering;

use crate::error::{DecodeError, EncodeError};
use crate::value::Type;

mod blob;
mod boolean;
mod float;
mod int;
mod interval;
mod utf8;

pub use blob::BlobCodec;
pub use boolean::BooleanCodec;
pub use float::Float8Codec;
pub use int::{Int8Codec, Uint8Codec};
pub use interval::{IntervalCodec, DEFAULT_NANOS_PER_MONTH};
pub use utf8::Utf8Codec;

/// Upper bound on the encoded size of a single term.
///
/// Variable-width payloads (text, blobs) beyond this cannot become index
/// terms; both directions of the codec reject them so the round-trip
/// contract holds exactly on the accepted set.
pub const MAX_TERM_BYTES: usize = 32_766;

/// A pluggable strategy bridging encoded bytes and decoded values of one
/// logical type.
///
/// Implementors are stateless after construction and safe to share across
/// threads; cells hold them behind an `Arc` and the index build constructs
/// and compares cells in parallel.
pub trait TypeCodec<T>: Send + Sync {
	/// The logical type this codec decodes into.
	fn ty(&self) -> Type;

	/// Decode an encoded payload into its logical value.
	fn decode(&self, bytes: &[u8]) -> Result<T, DecodeError>;

	/// Encode a logical value into its canonical payload.
	///
	/// For any well-formed payload `b`, `encode(decode(b)?)? == b`.
	fn encode(&self, value: &T) -> Result<Vec<u8>, EncodeError>;

	/// Order two encoded payloads.
	///
	/// Total over arbitrary byte strings; over well-formed payloads it
	/// coincides with the decoded type's natural order.
	fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering;
}

/// Reject a fixed-width payload of the wrong size.
fn expect_len(ty: Type, expected: usize, bytes: &[u8]) -> Result<(), DecodeError> {
	if bytes.len() != expected {
		return Err(DecodeError::WrongLength {
			ty,
			expected,
			got: bytes.len(),
		});
	}
	Ok(())
}
