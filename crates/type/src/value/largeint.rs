// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

/// Size of the scratch buffer used to render a 128-bit integer.
pub const LARGEINT_TEXT_CAPACITY: usize = 48;

/// Renders `value` as decimal ASCII into `buf` and returns the written tail.
///
/// Digits are produced from the end of the buffer backwards, so the result
/// is a suffix of `buf`.
pub fn format_largeint(value: i128, buf: &mut [u8; LARGEINT_TEXT_CAPACITY]) -> &[u8] {
	let mut magnitude = value.unsigned_abs();
	let mut pos = LARGEINT_TEXT_CAPACITY;

	loop {
		pos -= 1;
		buf[pos] = b'0' + (magnitude % 10) as u8;
		magnitude /= 10;
		if magnitude == 0 {
			break;
		}
	}

	if value < 0 {
		pos -= 1;
		buf[pos] = b'-';
	}

	&buf[pos..]
}

#[cfg(test)]
pub mod tests {
	use super::*;

	fn render(value: i128) -> String {
		let mut buf = [0u8; LARGEINT_TEXT_CAPACITY];
		String::from_utf8(format_largeint(value, &mut buf).to_vec()).unwrap()
	}

	#[test]
	fn test_zero() {
		assert_eq!(render(0), "0");
	}

	#[test]
	fn test_matches_display() {
		for value in [1, -1, 42, -42, 1_000_000_007, i64::MAX as i128, i64::MIN as i128 - 1] {
			assert_eq!(render(value), value.to_string());
		}
	}

	#[test]
	fn test_extremes() {
		assert_eq!(render(i128::MAX), "170141183460469231731687303715884105727");
		assert_eq!(render(i128::MIN), "-170141183460469231731687303715884105728");
	}
}
