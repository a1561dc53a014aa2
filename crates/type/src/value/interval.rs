// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A calendar-aware duration between two points in time.
///
/// Months are kept apart from days and nanoseconds because a month has no
/// fixed length: collapsing it requires a policy constant, which is the
/// codec's job (see `IntervalCodec` and its `nanos_per_month`), not the
/// value's. For the same reason `Interval` has no derived ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
	months: i32,
	days: i32,
	nanos: i64,
}

impl Interval {
	pub fn new(months: i32, days: i32, nanos: i64) -> Self {
		Self {
			months,
			days,
			nanos,
		}
	}

	pub fn zero() -> Self {
		Self::new(0, 0, 0)
	}

	pub fn from_months(months: i32) -> Self {
		Self::new(months, 0, 0)
	}

	pub fn from_days(days: i32) -> Self {
		Self::new(0, days, 0)
	}

	pub fn from_seconds(seconds: i64) -> Self {
		Self::new(0, 0, seconds * 1_000_000_000)
	}

	pub fn from_nanoseconds(nanos: i64) -> Self {
		Self::new(0, 0, nanos)
	}

	pub fn months(&self) -> i32 {
		self.months
	}

	pub fn days(&self) -> i32 {
		self.days
	}

	pub fn nanoseconds(&self) -> i64 {
		self.nanos
	}

	pub fn is_zero(&self) -> bool {
		self.months == 0 && self.days == 0 && self.nanos == 0
	}
}

impl Default for Interval {
	fn default() -> Self {
		Self::zero()
	}
}

impl Display for Interval {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.is_zero() {
			return f.write_str("0s");
		}

		let mut first = true;
		if self.months != 0 {
			write!(f, "{}mo", self.months)?;
			first = false;
		}
		if self.days != 0 {
			if !first {
				f.write_str(" ")?;
			}
			write!(f, "{}d", self.days)?;
			first = false;
		}
		if self.nanos != 0 {
			if !first {
				f.write_str(" ")?;
			}
			let seconds = self.nanos / 1_000_000_000;
			let subsec = self.nanos % 1_000_000_000;
			if subsec == 0 {
				write!(f, "{}s", seconds)?;
			} else {
				write!(f, "{}ns", self.nanos)?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_interval_display() {
		assert_eq!(Interval::zero().to_string(), "0s");
		assert_eq!(Interval::from_months(3).to_string(), "3mo");
		assert_eq!(Interval::from_days(12).to_string(), "12d");
		assert_eq!(Interval::from_seconds(5).to_string(), "5s");
		assert_eq!(Interval::from_nanoseconds(1_500).to_string(), "1500ns");
		assert_eq!(Interval::new(1, 2, 3_000_000_000).to_string(), "1mo 2d 3s");
	}

	#[test]
	fn test_interval_display_negative() {
		assert_eq!(Interval::from_months(-1).to_string(), "-1mo");
		assert_eq!(Interval::new(-1, 30, 0).to_string(), "-1mo 30d");
	}

	#[test]
	fn test_interval_accessors() {
		let interval = Interval::new(7, -3, 42);
		assert_eq!(interval.months(), 7);
		assert_eq!(interval.days(), -3);
		assert_eq!(interval.nanoseconds(), 42);
		assert!(!interval.is_zero());
		assert!(Interval::default().is_zero());
	}

	#[test]
	fn test_interval_serde_roundtrip() {
		let interval = Interval::new(1, 15, 500);
		let json = serde_json::to_string(&interval).unwrap();
		let recovered: Interval = serde_json::from_str(&json).unwrap();
		assert_eq!(interval, recovered);
	}
}
