// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

use std::cmp::Ordering;

use crate::codec::{TypeCodec, expect_len};
use crate::error::{DecodeError, EncodeError};
use crate::value::Type;

/// One byte: `0x00` for false, `0x01` for true.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanCodec;

impl TypeCodec<bool> for BooleanCodec {
	fn ty(&self) -> Type {
		Type::Boolean
	}

	fn decode(&self, bytes: &[u8]) -> Result<bool, DecodeError> {
		expect_len(Type::Boolean, 1, bytes)?;
		match bytes[0] {
			0x00 => Ok(false),
			0x01 => Ok(true),
			other => Err(DecodeError::Malformed {
				ty: Type::Boolean,
				reason: format!("invalid boolean byte {:#04x}", other),
			}),
		}
	}

	fn encode(&self, value: &bool) -> Result<Vec<u8>, EncodeError> {
		Ok(vec![*value as u8])
	}

	fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
		lhs.cmp(rhs)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_boolean_roundtrip() {
		let codec = BooleanCodec;
		for value in [false, true] {
			let encoded = codec.encode(&value).unwrap();
			assert_eq!(codec.decode(&encoded).unwrap(), value);
			assert_eq!(codec.encode(&codec.decode(&encoded).unwrap()).unwrap(), encoded);
		}
	}

	#[test]
	fn test_boolean_order() {
		let codec = BooleanCodec;
		let f = codec.encode(&false).unwrap();
		let t = codec.encode(&true).unwrap();
		assert_eq!(codec.compare(&f, &t), Ordering::Less);
		assert_eq!(codec.compare(&t, &t), Ordering::Equal);
	}

	#[test]
	fn test_boolean_malformed() {
		let codec = BooleanCodec;
		assert!(matches!(
			codec.decode(&[0x02]),
			Err(DecodeError::Malformed {
				ty: Type::Boolean,
				..
			})
		));
		assert!(matches!(
			codec.decode(&[]),
			Err(DecodeError::WrongLength {
				expected: 1,
				got: 0,
				..
			})
		));
	}
}
