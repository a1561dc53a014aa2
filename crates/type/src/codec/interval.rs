// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

use std::cmp::Ordering;

use crate::codec::{TypeCodec, expect_len};
use crate::error::{DecodeError, EncodeError};
use crate::value::{Interval, Type};

const NANOS_PER_DAY: i128 = 86_400_000_000_000;

/// Nanoseconds in a thirty-day month, the default month-normalization
/// constant for interval ordering.
pub const DEFAULT_NANOS_PER_MONTH: i64 = 2_592_000_000_000_000;

/// Sixteen bytes: months `i32`, days `i32`, nanos `i64`, each big-endian
/// two's complement.
///
/// The encoding keeps the three fields apart so the round-trip is exact;
/// ordering therefore cannot be memcmp. `compare` decodes both sides and
/// orders them by the normalized total `months * nanos_per_month + days *
/// nanos_per_day + nanos`, where `nanos_per_month` is configured per
/// schema column. Distinct encodings that normalize equal (one month vs.
/// thirty days under the default constant) are tie-broken on their raw
/// bytes so the order stays total and antisymmetric.
#[derive(Debug, Clone)]
pub struct IntervalCodec {
	nanos_per_month: i64,
}

impl IntervalCodec {
	pub fn new(nanos_per_month: i64) -> Self {
		Self {
			nanos_per_month,
		}
	}

	pub fn nanos_per_month(&self) -> i64 {
		self.nanos_per_month
	}

	/// Total duration in nanoseconds under this codec's month policy.
	fn normalize(&self, interval: &Interval) -> i128 {
		interval.months() as i128 * self.nanos_per_month as i128
			+ interval.days() as i128 * NANOS_PER_DAY
			+ interval.nanoseconds() as i128
	}
}

impl Default for IntervalCodec {
	fn default() -> Self {
		Self::new(DEFAULT_NANOS_PER_MONTH)
	}
}

impl TypeCodec<Interval> for IntervalCodec {
	fn ty(&self) -> Type {
		Type::Interval
	}

	fn decode(&self, bytes: &[u8]) -> Result<Interval, DecodeError> {
		expect_len(Type::Interval, 16, bytes)?;
		let months = i32::from_be_bytes(bytes[0..4].try_into().unwrap());
		let days = i32::from_be_bytes(bytes[4..8].try_into().unwrap());
		let nanos = i64::from_be_bytes(bytes[8..16].try_into().unwrap());
		Ok(Interval::new(months, days, nanos))
	}

	fn encode(&self, value: &Interval) -> Result<Vec<u8>, EncodeError> {
		let mut out = Vec::with_capacity(16);
		out.extend_from_slice(&value.months().to_be_bytes());
		out.extend_from_slice(&value.days().to_be_bytes());
		out.extend_from_slice(&value.nanoseconds().to_be_bytes());
		Ok(out)
	}

	fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
		match (self.decode(lhs), self.decode(rhs)) {
			(Ok(a), Ok(b)) => self
				.normalize(&a)
				.cmp(&self.normalize(&b))
				.then_with(|| lhs.cmp(rhs)),
			// Malformed payloads cannot happen for cells built through
			// this codec; fall back to raw byte order to stay total.
			_ => lhs.cmp(rhs),
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_interval_roundtrip() {
		let codec = IntervalCodec::default();
		let values = [
			Interval::zero(),
			Interval::new(1, 2, 3),
			Interval::new(-5, 40, -1_000_000_000),
			Interval::new(i32::MIN, i32::MAX, i64::MIN),
		];
		for value in values {
			let encoded = codec.encode(&value).unwrap();
			assert_eq!(encoded.len(), 16);
			assert_eq!(codec.decode(&encoded).unwrap(), value);
			assert_eq!(codec.encode(&codec.decode(&encoded).unwrap()).unwrap(), encoded);
		}
	}

	#[test]
	fn test_interval_order_normalizes_months() {
		let codec = IntervalCodec::default();
		let month = codec.encode(&Interval::from_months(1)).unwrap();
		let days_29 = codec.encode(&Interval::from_days(29)).unwrap();
		let days_31 = codec.encode(&Interval::from_days(31)).unwrap();

		assert_eq!(codec.compare(&days_29, &month), Ordering::Less);
		assert_eq!(codec.compare(&month, &days_31), Ordering::Less);
	}

	#[test]
	fn test_interval_equal_totals_tiebreak_on_bytes() {
		// 1 month and 30 days normalize equal under the default
		// constant; ordering must still be antisymmetric.
		let codec = IntervalCodec::default();
		let month = codec.encode(&Interval::from_months(1)).unwrap();
		let days = codec.encode(&Interval::from_days(30)).unwrap();

		let forward = codec.compare(&month, &days);
		let backward = codec.compare(&days, &month);
		assert_ne!(forward, Ordering::Equal);
		assert_eq!(forward, backward.reverse());
		assert_eq!(codec.compare(&month, &month), Ordering::Equal);
	}

	#[test]
	fn test_interval_custom_month_constant() {
		// A one-nanosecond month makes 2 months sort below 1 day.
		let codec = IntervalCodec::new(1);
		let months = codec.encode(&Interval::from_months(2)).unwrap();
		let day = codec.encode(&Interval::from_days(1)).unwrap();
		assert_eq!(codec.compare(&months, &day), Ordering::Less);
	}

	#[test]
	fn test_interval_wrong_length() {
		let codec = IntervalCodec::default();
		assert!(matches!(
			codec.decode(&[0u8; 15]),
			Err(DecodeError::WrongLength {
				ty: Type::Interval,
				expected: 16,
				got: 15,
			})
		));
	}
}
