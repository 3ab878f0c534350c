// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

/// Renders a duration in seconds as `[-]HH:MM:SS`.
///
/// Fractional seconds are truncated. Hours are not wrapped at 24, so a value
/// of 90000 seconds renders as `25:00:00`.
pub fn format_time_of_day(seconds: f64) -> String {
	let (sign, magnitude) = if seconds < 0.0 {
		("-", -seconds)
	} else {
		("", seconds)
	};

	let total = magnitude as i64;
	let hour = total / 3600;
	let minute = total / 60 % 60;
	let second = total % 60;

	format!("{sign}{hour:02}:{minute:02}:{second:02}")
}
