// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

use std::cmp::Ordering;

use crate::codec::{TypeCodec, expect_len};
use crate::error::{DecodeError, EncodeError};
use crate::value::Type;

/// Eight bytes big-endian with the sign bit flipped, so that memcmp over
/// the encoded payloads equals numeric order across the sign boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct Int8Codec;

impl TypeCodec<i64> for Int8Codec {
	fn ty(&self) -> Type {
		Type::Int8
	}

	fn decode(&self, bytes: &[u8]) -> Result<i64, DecodeError> {
		expect_len(Type::Int8, 8, bytes)?;
		let mut buf = [0u8; 8];
		buf.copy_from_slice(bytes);
		Ok((u64::from_be_bytes(buf) ^ (1 << 63)) as i64)
	}

	fn encode(&self, value: &i64) -> Result<Vec<u8>, EncodeError> {
		Ok(((*value as u64) ^ (1 << 63)).to_be_bytes().to_vec())
	}

	fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
		lhs.cmp(rhs)
	}
}

/// Eight bytes plain big-endian.
#[derive(Debug, Default, Clone, Copy)]
pub struct Uint8Codec;

impl TypeCodec<u64> for Uint8Codec {
	fn ty(&self) -> Type {
		Type::Uint8
	}

	fn decode(&self, bytes: &[u8]) -> Result<u64, DecodeError> {
		expect_len(Type::Uint8, 8, bytes)?;
		let mut buf = [0u8; 8];
		buf.copy_from_slice(bytes);
		Ok(u64::from_be_bytes(buf))
	}

	fn encode(&self, value: &u64) -> Result<Vec<u8>, EncodeError> {
		Ok(value.to_be_bytes().to_vec())
	}

	fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
		lhs.cmp(rhs)
	}
}
