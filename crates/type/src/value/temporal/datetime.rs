// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	io::{Cursor, Write},
};

use serde::{Deserialize, Serialize};

use crate::value::Field;

/// Size of the scratch buffer a date or datetime is rendered into.
pub const DATETIME_TEXT_CAPACITY: usize = 64;

const MICROS_PER_SECOND: u64 = 1_000_000;
const MICROS_PER_DAY: u64 = 86_400 * MICROS_PER_SECOND;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeKind {
	/// Calendar date only
	Date,
	/// Calendar date with time of day
	DateTime,
}

/// A calendar date, optionally with a time of day, interpreted in UTC.
///
/// Internally stored as days since Unix epoch (1970-01-01) plus the
/// microseconds elapsed since midnight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateTimeValue {
	days_since_epoch: i32,
	micros_of_day: u64,
	kind: TimeKind,
}

impl Default for DateTimeValue {
	fn default() -> Self {
		Self {
			days_since_epoch: 0,
			micros_of_day: 0,
			kind: TimeKind::DateTime,
		}
	}
}

// Calendar utilities
impl DateTimeValue {
	#[inline]
	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	#[inline]
	fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 if Self::is_leap_year(year) => 29,
			2 => 28,
			_ => 0,
		}
	}

	// Howard Hinnant's civil-from-days algorithms, with March as month zero.
	fn ymd_to_days_since_epoch(year: i32, month: u32, day: u32) -> Option<i32> {
		if !(1..=12).contains(&month) || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		let (y, m) = if month <= 2 {
			(year - 1, month as i32 + 9)
		} else {
			(year, month as i32 - 3)
		};

		let era = if y >= 0 {
			y
		} else {
			y - 399
		} / 400;
		let yoe = y - era * 400;
		let doy = (153 * m + 2) / 5 + day as i32 - 1;
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

		Some(era * 146097 + doe - 719468)
	}

	fn days_since_epoch_to_ymd(days: i32) -> (i32, u32, u32) {
		let days_since_ce = days + 719468;

		let era = if days_since_ce >= 0 {
			days_since_ce
		} else {
			days_since_ce - 146096
		} / 146097;
		let doe = days_since_ce - era * 146097;
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
		let y = yoe + era * 400;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
		let mp = (5 * doy + 2) / 153;
		let d = doy - (153 * mp + 2) / 5 + 1;
		let m = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		};
		let year = if m <= 2 {
			y + 1
		} else {
			y
		};

		(year, m as u32, d as u32)
	}
}

impl DateTimeValue {
	pub fn new_date(year: i32, month: u32, day: u32) -> Option<Self> {
		Self::ymd_to_days_since_epoch(year, month, day).map(|days_since_epoch| Self {
			days_since_epoch,
			micros_of_day: 0,
			kind: TimeKind::Date,
		})
	}

	pub fn new_datetime(
		year: i32,
		month: u32,
		day: u32,
		hour: u32,
		minute: u32,
		second: u32,
		microsecond: u32,
	) -> Option<Self> {
		if hour >= 24 || minute >= 60 || second >= 60 || microsecond as u64 >= MICROS_PER_SECOND {
			return None;
		}
		let days_since_epoch = Self::ymd_to_days_since_epoch(year, month, day)?;
		let seconds = hour as u64 * 3600 + minute as u64 * 60 + second as u64;
		Some(Self {
			days_since_epoch,
			micros_of_day: seconds * MICROS_PER_SECOND + microsecond as u64,
			kind: TimeKind::DateTime,
		})
	}

	/// Builds a datetime from microseconds since Unix epoch.
	pub fn from_timestamp_micros(micros: i64) -> Option<Self> {
		let days = micros.div_euclid(MICROS_PER_DAY as i64);
		let micros_of_day = micros.rem_euclid(MICROS_PER_DAY as i64) as u64;
		Some(Self {
			days_since_epoch: i32::try_from(days).ok()?,
			micros_of_day,
			kind: TimeKind::DateTime,
		})
	}

	pub fn kind(&self) -> TimeKind {
		self.kind
	}

	pub fn is_date(&self) -> bool {
		self.kind == TimeKind::Date
	}

	pub fn year(&self) -> i32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).0
	}

	pub fn month(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).1
	}

	pub fn day(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).2
	}

	pub fn hour(&self) -> u32 {
		(self.micros_of_day / MICROS_PER_SECOND / 3600) as u32
	}

	pub fn minute(&self) -> u32 {
		(self.micros_of_day / MICROS_PER_SECOND / 60 % 60) as u32
	}

	pub fn second(&self) -> u32 {
		(self.micros_of_day / MICROS_PER_SECOND % 60) as u32
	}

	pub fn microsecond(&self) -> u32 {
		(self.micros_of_day % MICROS_PER_SECOND) as u32
	}

	pub fn to_days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}

	pub fn timestamp_micros(&self) -> i64 {
		self.days_since_epoch as i64 * MICROS_PER_DAY as i64 + self.micros_of_day as i64
	}

	/// Renders the value into `buf` and returns the written prefix.
	pub fn to_text<'a>(&self, buf: &'a mut [u8; DATETIME_TEXT_CAPACITY]) -> &'a [u8] {
		let mut cursor = Cursor::new(&mut buf[..]);
		// The longest rendering is well under the buffer capacity.
		let _ = write!(cursor, "{self}");
		let len = cursor.position() as usize;
		&buf[..len]
	}
}

impl Display for DateTimeValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = Self::days_since_epoch_to_ymd(self.days_since_epoch);
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", -year, month, day)?;
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)?;
		}

		if self.kind == TimeKind::Date {
			return Ok(());
		}

		write!(f, " {:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;
		match self.microsecond() {
			0 => Ok(()),
			micros => write!(f, ".{:06}", micros),
		}
	}
}

impl From<DateTimeValue> for Field {
	/// Microseconds since Unix epoch.
	fn from(value: DateTimeValue) -> Self {
		Field::Int64(value.timestamp_micros())
	}
}
