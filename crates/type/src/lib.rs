// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

//! Logical types, value types and binary codecs.
//!
//! A [`TypeCodec`] bridges the storage engine's encoded byte form of a
//! column value and the decoded value the indexing layer operates on. The
//! codec also defines the binary ordering of encoded values, which must
//! agree with the storage engine's own ordering of the same bytes.

pub mod codec;
pub mod error;
pub mod value;

pub use codec::{
	BlobCodec, BooleanCodec, DEFAULT_NANOS_PER_MONTH, Float8Codec, Int8Codec, IntervalCodec, MAX_TERM_BYTES,
	TypeCodec, Uint8Codec, Utf8Codec,
};
pub use error::{DecodeError, EncodeError};
pub use value::{Interval, Type};
