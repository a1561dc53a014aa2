// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

use std::cmp::Ordering;

use crate::codec::{MAX_TERM_BYTES, TypeCodec};
use crate::error::{DecodeError, EncodeError};
use crate::value::Type;

/// Identity encoding over raw bytes; memcmp order. Payloads beyond
/// [`MAX_TERM_BYTES`] are rejected in both directions.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlobCodec;

impl TypeCodec<Vec<u8>> for BlobCodec {
	fn ty(&self) -> Type {
		Type::Blob
	}

	fn decode(&self, bytes: &[u8]) -> Result<Vec<u8>, DecodeError> {
		if bytes.len() > MAX_TERM_BYTES {
			return Err(DecodeError::TermTooLong {
				ty: Type::Blob,
				max: MAX_TERM_BYTES,
				got: bytes.len(),
			});
		}
		Ok(bytes.to_vec())
	}

	fn encode(&self, value: &Vec<u8>) -> Result<Vec<u8>, EncodeError> {
		if value.len() > MAX_TERM_BYTES {
			return Err(EncodeError::TermTooLong {
				ty: Type::Blob,
				max: MAX_TERM_BYTES,
				got: value.len(),
			});
		}
		Ok(value.clone())
	}

	fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
		lhs.cmp(rhs)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_blob_roundtrip() {
		let codec = BlobCodec;
		for value in [vec![], vec![0u8], vec![0xde, 0xad, 0xbe, 0xef]] {
			let encoded = codec.encode(&value).unwrap();
			assert_eq!(codec.decode(&encoded).unwrap(), value);
		}
	}

	#[test]
	fn test_blob_order_is_memcmp() {
		let codec = BlobCodec;
		assert_eq!(codec.compare(&[0x01], &[0x02]), Ordering::Less);
		assert_eq!(codec.compare(&[0x01], &[0x01, 0x00]), Ordering::Less);
		assert_eq!(codec.compare(&[0xff], &[0x00, 0xff]), Ordering::Greater);
	}

	#[test]
	fn test_blob_term_limit() {
		let codec = BlobCodec;
		let oversized = vec![0u8; MAX_TERM_BYTES + 1];
		assert!(matches!(codec.encode(&oversized), Err(EncodeError::TermTooLong { .. })));
		assert!(matches!(codec.decode(&oversized), Err(DecodeError::TermTooLong { .. })));
	}
}
