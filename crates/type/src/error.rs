// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

use crate::value::Type;

/// An encoded payload could not be interpreted as the codec's logical type.
///
/// Raised at cell construction time; once a cell exists both of its forms
/// are codec-consistent, so there is no recoverable state to carry here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
	#[error("{ty} payload has {got} bytes, expected {expected}")]
	WrongLength {
		ty: Type,
		expected: usize,
		got: usize,
	},

	#[error("{ty} payload of {got} bytes exceeds the {max} byte term limit")]
	TermTooLong {
		ty: Type,
		max: usize,
		got: usize,
	},

	#[error("{ty} payload is not valid UTF-8")]
	InvalidUtf8 {
		ty: Type,
	},

	#[error("{ty} payload is malformed: {reason}")]
	Malformed {
		ty: Type,
		reason: String,
	},
}

/// A decoded value could not be serialized by the codec.
///
/// Should not occur for well-typed callers, but is surfaced rather than
/// silently truncated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
	#[error("{ty} value of {got} encoded bytes exceeds the {max} byte term limit")]
	TermTooLong {
		ty: Type,
		max: usize,
		got: usize,
	},

	#[error("{ty} value cannot be encoded: {reason}")]
	Unrepresentable {
		ty: Type,
		reason: String,
	},
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_decode_error_display() {
		let err = DecodeError::WrongLength {
			ty: Type::Int8,
			expected: 8,
			got: 3,
		};
		assert_eq!(err.to_string(), "int8 payload has 3 bytes, expected 8");

		let err = DecodeError::InvalidUtf8 {
			ty: Type::Utf8,
		};
		assert_eq!(err.to_string(), "utf8 payload is not valid UTF-8");
	}

	#[test]
	fn test_encode_error_display() {
		let err = EncodeError::TermTooLong {
			ty: Type::Blob,
			max: 32766,
			got: 40000,
		};
		assert_eq!(err.to_string(), "blob value of 40000 encoded bytes exceeds the 32766 byte term limit");
	}
}
