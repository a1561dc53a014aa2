// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

use std::cmp::Ordering;

use crate::codec::{TypeCodec, expect_len};
use crate::error::{DecodeError, EncodeError};
use crate::value::Type;

/// Eight bytes in the IEEE 754 total-order encoding: the sign bit is
/// flipped for non-negative values and all bits are flipped for negative
/// ones, so memcmp over the payloads yields `-NaN < -inf < ... < -0.0 <
/// 0.0 < ... < inf < NaN`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Float8Codec;

impl TypeCodec<f64> for Float8Codec {
	fn ty(&self) -> Type {
		Type::Float8
	}

	fn decode(&self, bytes: &[u8]) -> Result<f64, DecodeError> {
		expect_len(Type::Float8, 8, bytes)?;
		let mut buf = [0u8; 8];
		buf.copy_from_slice(bytes);
		let encoded = u64::from_be_bytes(buf);
		let bits = if encoded >> 63 == 1 {
			// Originally non-negative: only the sign bit was flipped.
			encoded ^ (1 << 63)
		} else {
			!encoded
		};
		Ok(f64::from_bits(bits))
	}

	fn encode(&self, value: &f64) -> Result<Vec<u8>, EncodeError> {
		let bits = value.to_bits();
		let encoded = if bits >> 63 == 1 {
			!bits
		} else {
			bits ^ (1 << 63)
		};
		Ok(encoded.to_be_bytes().to_vec())
	}

	fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
		lhs.cmp(rhs)
	}
}
