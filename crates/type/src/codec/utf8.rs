// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

use std::cmp::Ordering;

use crate::codec::{MAX_TERM_BYTES, TypeCodec};
use crate::error::{DecodeError, EncodeError};
use crate::value::Type;

/// Raw UTF-8 bytes; the byte order is lexicographic byte order, which for
/// UTF-8 equals code-point order. Payloads beyond [`MAX_TERM_BYTES`] are
/// rejected in both directions.
#[derive(Debug, Default, Clone, Copy)]
pub struct Utf8Codec;

impl TypeCodec<String> for Utf8Codec {
	fn ty(&self) -> Type {
		Type::Utf8
	}

	fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
		if bytes.len() > MAX_TERM_BYTES {
			return Err(DecodeError::TermTooLong {
				ty: Type::Utf8,
				max: MAX_TERM_BYTES,
				got: bytes.len(),
			});
		}
		String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8 {
			ty: Type::Utf8,
		})
	}

	fn encode(&self, value: &String) -> Result<Vec<u8>, EncodeError> {
		if value.len() > MAX_TERM_BYTES {
			return Err(EncodeError::TermTooLong {
				ty: Type::Utf8,
				max: MAX_TERM_BYTES,
				got: value.len(),
			});
		}
		Ok(value.as_bytes().to_vec())
	}

	fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
		lhs.cmp(rhs)
	}
}
