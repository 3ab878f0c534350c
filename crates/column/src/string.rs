// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::{cmp::Ordering, mem::size_of};

use tessera_type::{Error, Field, Result, StringRef};

use crate::selection::{check_filter, check_index, check_permutation, check_range, check_replicate};

/// A column of variable-length byte strings.
///
/// All values live back to back in `chars`, each followed by a single zero
/// byte. `offsets[i]` is the end (exclusive, terminator included) of row
/// `i`, so row `i` spans `offsets[i - 1]..offsets[i]` with an implicit
/// `offsets[-1] == 0`. Offsets are non-decreasing, every row is at least one
/// byte long and the last offset equals `chars.len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnString {
	offsets: Vec<usize>,
	chars: Vec<u8>,
}

impl ColumnString {
	pub fn new() -> Self {
		Self::default()
	}

	/// Pre-sizes for `rows` values totalling `bytes` bytes of content.
	pub fn with_capacity(rows: usize, bytes: usize) -> Self {
		Self {
			offsets: Vec::with_capacity(rows),
			chars: Vec::with_capacity(bytes + rows),
		}
	}

	pub fn len(&self) -> usize {
		self.offsets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.offsets.is_empty()
	}

	pub fn offsets(&self) -> &[usize] {
		&self.offsets
	}

	pub fn chars(&self) -> &[u8] {
		&self.chars
	}

	/// Bytes held by the column, terminators and offsets included.
	pub fn byte_size(&self) -> usize {
		self.chars.len() + self.offsets.len() * size_of::<usize>()
	}

	pub fn reserve(&mut self, rows: usize) {
		self.offsets.reserve(rows);
	}

	pub fn clear(&mut self) {
		self.offsets.clear();
		self.chars.clear();
	}

	#[inline]
	fn offset_at(&self, index: usize) -> usize {
		if index == 0 {
			0
		} else {
			self.offsets[index - 1]
		}
	}

	/// Stored size of a row, terminator included.
	#[inline]
	fn size_at(&self, index: usize) -> usize {
		self.offsets[index] - self.offset_at(index)
	}

	#[inline]
	fn raw_at(&self, index: usize) -> &[u8] {
		&self.chars[self.offset_at(index)..self.offsets[index]]
	}

	#[inline]
	fn data_at(&self, index: usize) -> &[u8] {
		&self.chars[self.offset_at(index)..self.offsets[index] - 1]
	}

	#[inline]
	fn push_raw(&mut self, raw: &[u8]) {
		self.chars.extend_from_slice(raw);
		self.offsets.push(self.chars.len());
	}

	pub fn get(&self, index: usize) -> Option<&[u8]> {
		(index < self.len()).then(|| self.data_at(index))
	}

	/// The value of row `index` as a string view.
	///
	/// # Panics
	///
	/// Panics if `index >= len()`.
	pub fn get_data_at(&self, index: usize) -> StringRef<'_> {
		StringRef::new(self.data_at(index))
	}

	/// The value of row `index` including its trailing zero byte.
	pub fn get_with_terminator(&self, index: usize) -> Option<&[u8]> {
		(index < self.len()).then(|| self.raw_at(index))
	}

	pub fn field_at(&self, index: usize) -> Option<Field> {
		self.get(index).map(Field::from)
	}

	pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
		(0..self.len()).map(|i| self.data_at(i))
	}

	pub fn insert_data(&mut self, data: &[u8]) {
		self.chars.reserve(data.len() + 1);
		self.chars.extend_from_slice(data);
		self.chars.push(0);
		self.offsets.push(self.chars.len());
	}

	pub fn insert_default(&mut self) {
		self.chars.push(0);
		self.offsets.push(self.chars.len());
	}

	pub fn insert_field(&mut self, field: &Field) -> Result<()> {
		let data = field.safe_get::<Vec<u8>>()?;
		self.insert_data(data);
		Ok(())
	}

	/// Appends row `index` of `src`.
	pub fn insert_from(&mut self, src: &ColumnString, index: usize) -> Result<()> {
		check_index(index, src.len())?;

		let size = src.size_at(index);
		if size == 1 {
			// empty string, only the terminator
			self.chars.push(0);
		} else {
			let start = src.offset_at(index);
			self.chars.extend_from_slice(&src.chars[start..start + size]);
		}
		self.offsets.push(self.chars.len());
		Ok(())
	}

	/// Appends rows `start..start + length` of `src` with one bulk copy.
	pub fn insert_range_from(&mut self, src: &ColumnString, start: usize, length: usize) -> Result<()> {
		check_range(start, length, src.len())?;
		if length == 0 {
			return Ok(());
		}

		let nested_start = src.offset_at(start);
		let nested_end = src.offsets[start + length - 1];
		let base = self.chars.len();

		self.chars.extend_from_slice(&src.chars[nested_start..nested_end]);
		self.offsets.extend(src.offsets[start..start + length].iter().map(|&o| o - nested_start + base));
		Ok(())
	}

	/// Removes the last `count` rows.
	pub fn pop_back(&mut self, count: usize) -> Result<()> {
		if count > self.len() {
			return Err(Error::PopOutOfBounds {
				count,
				size: self.len(),
			});
		}
		let remaining = self.len() - count;
		self.chars.truncate(self.offset_at(remaining));
		self.offsets.truncate(remaining);
		Ok(())
	}

	/// Keeps the rows whose mask entry is set. Consecutive kept rows are
	/// copied as a single byte range.
	pub fn filter(&self, mask: &[bool], size_hint: usize) -> Result<Self> {
		check_filter(mask, self.len())?;

		let mut result = Self::new();
		if size_hint > 0 && !self.is_empty() {
			let rows = size_hint.min(self.len());
			result.offsets.reserve(rows);
			result.chars.reserve(self.chars.len() / self.len() * rows);
		}

		let mut row = 0;
		while row < mask.len() {
			if !mask[row] {
				row += 1;
				continue;
			}

			let run_start = row;
			while row < mask.len() && mask[row] {
				row += 1;
			}

			let byte_start = self.offset_at(run_start);
			let byte_end = self.offsets[row - 1];
			let base = result.chars.len();
			result.chars.extend_from_slice(&self.chars[byte_start..byte_end]);
			result.offsets.extend(self.offsets[run_start..row].iter().map(|&o| o - byte_start + base));
		}

		Ok(result)
	}

	/// Reorders rows so that row `i` of the result is row `perm[i]` of
	/// `self`. A non-zero `limit` truncates the result.
	pub fn permute(&self, perm: &[usize], limit: usize) -> Result<Self> {
		let limit = check_permutation(perm, limit, self.len())?;
		let perm = &perm[..limit];

		let bytes = perm.iter().map(|&i| self.size_at(i)).sum();
		let mut result = Self {
			offsets: Vec::with_capacity(limit),
			chars: Vec::with_capacity(bytes),
		};
		for &i in perm {
			result.push_raw(self.raw_at(i));
		}
		Ok(result)
	}

	/// Repeats row `i` `counts[i]` times.
	pub fn replicate(&self, counts: &[usize]) -> Result<Self> {
		let rows = check_replicate(counts, self.len())?;

		let bytes = counts.iter().enumerate().map(|(i, &count)| self.size_at(i) * count).sum();
		let mut result = Self {
			offsets: Vec::with_capacity(rows),
			chars: Vec::with_capacity(bytes),
		};
		for (i, &count) in counts.iter().enumerate() {
			let raw = self.raw_at(i);
			for _ in 0..count {
				result.push_raw(raw);
			}
		}
		Ok(result)
	}

	/// Byte-wise comparison of row `n` of `self` with row `m` of `other`;
	/// a proper prefix orders first.
	///
	/// # Panics
	///
	/// Panics if either index is out of bounds.
	pub fn compare_at(&self, n: usize, m: usize, other: &ColumnString) -> Ordering {
		self.data_at(n).cmp(other.data_at(m))
	}

	/// A copy with exactly `size` rows, truncating or padding with empty
	/// strings.
	pub fn clone_resized(&self, size: usize) -> Self {
		if size <= self.len() {
			return Self {
				offsets: self.offsets[..size].to_vec(),
				chars: self.chars[..self.offset_at(size)].to_vec(),
			};
		}

		let mut result = self.clone();
		result.offsets.reserve(size - self.len());
		for _ in self.len()..size {
			result.insert_default();
		}
		result
	}
}

impl<T: AsRef<[u8]>> FromIterator<T> for ColumnString {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut column = Self::new();
		column.extend(iter);
		column
	}
}

impl<T: AsRef<[u8]>> Extend<T> for ColumnString {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for value in iter {
			self.insert_data(value.as_ref());
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use tessera_type::FieldKind;

	fn column(values: &[&str]) -> ColumnString {
		values.iter().collect()
	}

	fn values(column: &ColumnString) -> Vec<String> {
		column.iter().map(|v| String::from_utf8(v.to_vec()).unwrap()).collect()
	}

	#[test]
	fn test_layout() {
		let column = column(&["ab", "", "c"]);

		assert_eq!(column.len(), 3);
		assert_eq!(column.offsets(), &[3, 4, 6]);
		assert_eq!(column.chars(), b"ab\0\0c\0");
		assert_eq!(column.get(0), Some(&b"ab"[..]));
		assert_eq!(column.get(1), Some(&b""[..]));
		assert_eq!(column.get(3), None);
	}

	#[test]
	fn test_with_capacity() {
		let column = ColumnString::with_capacity(10, 100);
		assert_eq!(column.len(), 0);
		assert!(column.is_empty());
	}

	#[test]
	fn test_get_with_terminator() {
		let column = column(&["xyz"]);
		assert_eq!(column.get_with_terminator(0), Some(&b"xyz\0"[..]));
		assert_eq!(column.get_data_at(0).len(), 3);
	}

	#[test]
	fn test_insert_default_and_field() {
		let mut column = ColumnString::new();
		column.insert_default();
		column.insert_field(&Field::string("v")).unwrap();

		assert_eq!(values(&column), vec!["", "v"]);
		assert_eq!(column.field_at(1), Some(Field::string("v")));

		let err = column.insert_field(&Field::Int64(1)).unwrap_err();
		assert_eq!(
			err,
			Error::BadGet {
				has: FieldKind::Int64,
				requested: FieldKind::String
			}
		);
		assert_eq!(column.len(), 2);
	}

	#[test]
	fn test_insert_from() {
		let src = column(&["hello", "", "world"]);
		let mut dst = ColumnString::new();

		dst.insert_from(&src, 2).unwrap();
		dst.insert_from(&src, 1).unwrap();
		dst.insert_from(&src, 0).unwrap();

		assert_eq!(values(&dst), vec!["world", "", "hello"]);
		assert_eq!(dst.chars(), b"world\0\0hello\0");
	}

	#[test]
	fn test_insert_from_out_of_bounds() {
		let src = column(&["a"]);
		let mut dst = column(&["keep"]);
		assert!(dst.insert_from(&src, 1).is_err());
		assert_eq!(values(&dst), vec!["keep"]);
	}

	#[test]
	fn test_insert_range_from() {
		let src = column(&["a", "bb", "", "dddd"]);
		let mut dst = column(&["x"]);

		dst.insert_range_from(&src, 1, 3).unwrap();

		assert_eq!(values(&dst), vec!["x", "bb", "", "dddd"]);
		assert_eq!(dst.offsets(), &[2, 5, 6, 11]);
		assert_eq!(*dst.offsets().last().unwrap(), dst.chars().len());
	}

	#[test]
	fn test_insert_range_from_rejects_overrun() {
		let src = column(&["a", "b"]);
		let mut dst = ColumnString::new();

		assert_eq!(
			dst.insert_range_from(&src, 1, 2),
			Err(Error::RangeOutOfBounds {
				start: 1,
				length: 2,
				size: 2
			})
		);
		assert!(dst.is_empty());

		dst.insert_range_from(&src, 2, 0).unwrap();
		assert!(dst.is_empty());
	}

	#[test]
	fn test_pop_back() {
		let mut column = column(&["a", "bb", "ccc"]);
		column.pop_back(2).unwrap();
		assert_eq!(values(&column), vec!["a"]);
		assert_eq!(column.chars(), b"a\0");

		assert!(column.pop_back(2).is_err());
		assert_eq!(column.len(), 1);

		column.pop_back(1).unwrap();
		assert!(column.is_empty());
		assert!(column.chars().is_empty());
	}

	#[test]
	fn test_filter() {
		let column = column(&["keep", "drop", "keep2", "keep3", "drop"]);

		let filtered = column.filter(&[true, false, true, true, false], 3).unwrap();

		assert_eq!(values(&filtered), vec!["keep", "keep2", "keep3"]);
		assert_eq!(filtered.chars().len(), 5 + 6 + 6);
	}

	#[test]
	fn test_filter_size_mismatch() {
		let column = column(&["a", "b"]);
		assert_eq!(
			column.filter(&[true], 0),
			Err(Error::FilterSizeMismatch {
				filter: 1,
				column: 2
			})
		);
	}

	#[test]
	fn test_filter_none_and_all() {
		let column = column(&["a", "b"]);
		assert!(column.filter(&[false, false], 0).unwrap().is_empty());
		assert_eq!(column.filter(&[true, true], 0).unwrap(), column);
	}

	#[test]
	fn test_permute() {
		let column = column(&["first", "second", "third"]);

		let permuted = column.permute(&[2, 0, 1], 0).unwrap();
		assert_eq!(values(&permuted), vec!["third", "first", "second"]);

		let limited = column.permute(&[1, 2, 0], 2).unwrap();
		assert_eq!(values(&limited), vec!["second", "third"]);
	}

	#[test]
	fn test_permute_with_out_of_bounds() {
		let column = column(&["a", "b"]);
		assert_eq!(
			column.permute(&[1, 5], 0),
			Err(Error::PermutationIndexOutOfBounds {
				index: 5,
				size: 2
			})
		);
		assert!(column.permute(&[1], 0).is_err());
	}

	#[test]
	fn test_replicate() {
		let column = column(&["a", "", "ccc"]);

		let replicated = column.replicate(&[2, 0, 3]).unwrap();

		assert_eq!(values(&replicated), vec!["a", "a", "ccc", "ccc", "ccc"]);
		assert!(column.replicate(&[1, 1]).is_err());
	}

	#[test]
	fn test_compare_at() {
		let left = column(&["abc", "ab", ""]);
		let right = column(&["abd", "ab", "a"]);

		assert_eq!(left.compare_at(0, 0, &right), Ordering::Less);
		assert_eq!(left.compare_at(1, 1, &right), Ordering::Equal);
		assert_eq!(left.compare_at(2, 2, &right), Ordering::Less);
		assert_eq!(right.compare_at(2, 1, &left), Ordering::Less);
		assert_eq!(left.compare_at(0, 1, &left), Ordering::Greater);
	}

	#[test]
	fn test_compare_at_is_bytewise() {
		let column: ColumnString = [&[0xffu8][..], &[0x01u8, 0x00][..]].into_iter().collect();
		assert_eq!(column.compare_at(0, 1, &column), Ordering::Greater);
	}

	#[test]
	fn test_clone_resized() {
		let column = column(&["a", "b", "c"]);

		assert_eq!(values(&column.clone_resized(2)), vec!["a", "b"]);
		assert_eq!(values(&column.clone_resized(5)), vec!["a", "b", "c", "", ""]);
		assert!(column.clone_resized(0).chars().is_empty());
	}

	#[test]
	fn test_byte_size() {
		let column = column(&["ab", "c"]);
		assert_eq!(column.byte_size(), 5 + 2 * size_of::<usize>());
	}

	#[test]
	fn test_clear() {
		let mut column = column(&["ab", "c"]);
		column.clear();
		assert!(column.is_empty());
		column.insert_data(b"z");
		assert_eq!(column.offsets(), &[2]);
	}
}
