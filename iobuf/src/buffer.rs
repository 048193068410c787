// SPDX-License-Identifier: Apache-2.0

mod status;

pub use status::*;

use std::cmp::min;
use std::fmt;
use std::fmt::{Debug, Formatter};
use all_asserts::debug_assert_le;
use log::trace;
use crate::{DEFAULT_CAPACITY, Result};
use crate::error::ResultContext;
use crate::OperationKind::Fill;
use crate::streams::Source;

/// A fixed-capacity byte buffer, filled from a [`Source`].
///
/// The buffer holds up to `N` bytes in a single block allocated on creation. It
/// never grows: bytes are appended by [`fill`](Self::fill) until the block is
/// full, after which fills read nothing. The contents can be inspected but not
/// removed; drop the buffer (or [`destroy`](Self::destroy) it) and create a new
/// one to start over.
pub struct IoBuffer<const N: usize = DEFAULT_CAPACITY> {
	data: Box<[u8]>,
	used: usize,
}

impl<const N: usize> Default for IoBuffer<N> {
	fn default() -> Self { Self::new() }
}

impl<const N: usize> Debug for IoBuffer<N> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("IoBuffer")
			.field("count", &self.used)
			.field("capacity", &N)
			.field("status", &self.status())
			.finish_non_exhaustive()
	}
}

impl<const N: usize> AsRef<[u8]> for IoBuffer<N> {
	fn as_ref(&self) -> &[u8] { self.as_slice() }
}

impl<const N: usize> IoBuffer<N> {
	/// Allocates a new, empty buffer.
	pub fn new() -> Self {
		Self {
			data: vec![0; N].into_boxed_slice(),
			used: 0,
		}
	}

	/// Frees the buffer. It cannot be used after this call; to free a buffer that
	/// may be absent, use [`destroy`](crate::destroy).
	#[inline]
	pub fn destroy(self) { drop(self) }

	/// Reads up to `count` bytes from `source` into the buffer, returning the
	/// number of bytes read.
	///
	/// The count is limited to the remaining space. If no space remains, or the
	/// limited count is zero, returns `0` without touching the source. Otherwise
	/// exactly one read is attempted. The number of bytes read may be less than
	/// requested, `0` if the source has reached its end. The caller decides
	/// whether to fill again; short reads are never retried.
	///
	/// # Errors
	///
	/// Returns any error raised by the source, leaving the buffer unchanged.
	pub fn fill(&mut self, mut source: impl Source, count: usize) -> Result<usize> {
		let to_read = min(count, self.remaining());
		if to_read == 0 {
			trace!("skipped fill of {count}B, {}B remaining", self.remaining());
			return Ok(0)
		}

		let start = self.used;
		let spare = &mut self.data[start..start + to_read];
		// A misbehaving source could report more than it was given.
		let read = min(source.read(spare).context(Fill)?, to_read);
		self.used += read;
		debug_assert_le!(self.used, N);

		trace!("filled {read}B of {count}B requested ({to_read}B available)");
		Ok(read)
	}

	/// Returns the status of the buffer.
	pub fn status(&self) -> Status {
		match self.used {
			0 => Status::Empty,
			used if used == N => Status::Full,
			_ => Status::Data
		}
	}

	/// Returns the number of bytes in the buffer.
	#[inline]
	pub fn count(&self) -> usize { self.used }

	/// Returns the maximum number of bytes the buffer can hold.
	#[inline]
	pub const fn capacity(&self) -> usize { N }

	/// Returns the number of bytes that can still be filled.
	#[inline]
	pub fn remaining(&self) -> usize { N - self.used }

	/// Returns `true` if the buffer contains no data.
	#[inline]
	pub fn is_empty(&self) -> bool { self.status().is_empty() }

	/// Returns `true` if the buffer cannot be filled further.
	#[inline]
	pub fn is_full(&self) -> bool { self.status().is_full() }

	/// Returns a slice over the filled bytes.
	pub fn as_slice(&self) -> &[u8] {
		&self.data[..self.used]
	}
}

/// Frees `buffer` if present. Passing `None` has no effect.
pub fn destroy<const N: usize>(buffer: Option<IoBuffer<N>>) {
	if let Some(buffer) = buffer {
		buffer.destroy();
	}
}
