// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::iter::repeat_n;

#[inline]
pub(crate) fn pow10(exp: u32) -> Option<i128> {
	10i128.checked_pow(exp)
}

/// Inserts a decimal point `scale` digits from the right of `digits`.
///
/// `digits` holds the magnitude only. A negative sign is emitted unless the
/// magnitude is zero.
pub(crate) fn place_point(digits: &str, scale: usize, negative: bool) -> String {
	let mut out = String::with_capacity(digits.len() + scale + 3);
	if negative && digits.bytes().any(|b| b != b'0') {
		out.push('-');
	}

	if scale == 0 {
		out.push_str(digits);
		return out;
	}

	if digits.len() <= scale {
		out.push_str("0.");
		out.extend(repeat_n('0', scale - digits.len()));
		out.push_str(digits);
	} else {
		let (int, frac) = digits.split_at(digits.len() - scale);
		out.push_str(int);
		out.push('.');
		out.push_str(frac);
	}
	out
}
