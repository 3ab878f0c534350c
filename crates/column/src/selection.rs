// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

//! Argument checks and element-wise kernels shared by the fixed-width columns.

use tessera_type::{Error, Result};

pub(crate) fn check_filter(mask: &[bool], size: usize) -> Result<()> {
	if mask.len() != size {
		return Err(Error::FilterSizeMismatch {
			filter: mask.len(),
			column: size,
		});
	}
	Ok(())
}

/// Resolves the number of rows a permutation produces. A `limit` of zero
/// means the whole column.
pub(crate) fn check_permutation(perm: &[usize], limit: usize, size: usize) -> Result<usize> {
	let limit = if limit == 0 {
		size
	} else {
		limit.min(size)
	};

	if perm.len() < limit {
		return Err(Error::PermutationTooShort {
			permutation: perm.len(),
			required: limit,
		});
	}

	if let Some(&index) = perm[..limit].iter().find(|&&index| index >= size) {
		return Err(Error::PermutationIndexOutOfBounds {
			index,
			size,
		});
	}

	Ok(limit)
}

pub(crate) fn check_replicate(counts: &[usize], size: usize) -> Result<usize> {
	if counts.len() != size {
		return Err(Error::ReplicateSizeMismatch {
			counts: counts.len(),
			column: size,
		});
	}
	Ok(counts.iter().sum())
}

pub(crate) fn check_range(start: usize, length: usize, size: usize) -> Result<()> {
	match start.checked_add(length) {
		Some(end) if end <= size => Ok(()),
		_ => Err(Error::RangeOutOfBounds {
			start,
			length,
			size,
		}),
	}
}

pub(crate) fn check_index(index: usize, size: usize) -> Result<()> {
	if index >= size {
		return Err(Error::IndexOutOfBounds {
			index,
			size,
		});
	}
	Ok(())
}

/// `size_hint`, when positive, pre-sizes the result.
pub(crate) fn filter_vec<T: Clone>(data: &[T], mask: &[bool], size_hint: usize) -> Result<Vec<T>> {
	check_filter(mask, data.len())?;
	let mut result = Vec::with_capacity(size_hint.min(data.len()));
	result.extend(data.iter().zip(mask).filter(|(_, keep)| **keep).map(|(v, _)| v.clone()));
	Ok(result)
}

pub(crate) fn permute_vec<T: Clone>(data: &[T], perm: &[usize], limit: usize) -> Result<Vec<T>> {
	let limit = check_permutation(perm, limit, data.len())?;
	Ok(perm[..limit].iter().map(|&i| data[i].clone()).collect())
}

pub(crate) fn replicate_vec<T: Clone>(data: &[T], counts: &[usize]) -> Result<Vec<T>> {
	let total = check_replicate(counts, data.len())?;
	let mut result = Vec::with_capacity(total);
	for (value, &count) in data.iter().zip(counts) {
		result.extend(std::iter::repeat_n(value, count).cloned());
	}
	Ok(result)
}
