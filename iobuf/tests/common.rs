// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code, unused_macros)]

use std::fmt::{Arguments, Debug};
use std::io;
use iobuf::{Error, OperationKind, Result};
use iobuf::streams::{Source, Stream};

macro_rules! qc_assert_eq {
	($left:expr,$right:expr) => {{
		let left = $left;
		let right = $right;
		if left == right {
			TestResult::passed()
		} else {
			TestResult::error(
				common::format_qc_assert_error(&left, &right, None)
			)
		}
	}};
    ($left:expr,$right:expr,$($arg:tt)+) => {{
		let left = $left;
		let right = $right;
		if left == right {
			TestResult::passed()
		} else {
			TestResult::error(
				common::format_qc_assert_error(&left, &right, Some(format_args!($($arg)+)))
			)
		}
	}};
}

pub fn format_qc_assert_error<L: Debug, R: Debug>(left: &L, right: &R, msg: Option<Arguments>) -> String {
	if let Some(msg) = msg {
		format!(
			"assertion failed `(left == right)`: {msg}\n \
			left: `{left:?}`,\nright: `{right:?}`",
		)
	} else {
		format!(
			"assertion failed `(left == right)`:\n \
			left: `{left:?}`,\nright: `{right:?}`",
		)
	}
}

/// A source that always satisfies the full request with `byte`, counting reads.
#[derive(Debug, Default)]
pub struct FullSource {
	pub byte: u8,
	pub reads: usize,
}

impl FullSource {
	pub fn new(byte: u8) -> Self {
		Self { byte, reads: 0 }
	}
}

impl Stream for FullSource { }

impl Source for FullSource {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
		self.reads += 1;
		buf.fill(self.byte);
		Ok(buf.len())
	}
}

/// A source that yields at most `limit` bytes per read, until `len` bytes have
/// been read in total.
#[derive(Debug)]
pub struct ShortSource {
	pub limit: usize,
	pub len: usize,
	pub reads: usize,
}

impl ShortSource {
	pub fn new(limit: usize, len: usize) -> Self {
		Self { limit, len, reads: 0 }
	}
}

impl Stream for ShortSource { }

impl Source for ShortSource {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
		self.reads += 1;
		let count = buf.len().min(self.limit).min(self.len);
		buf[..count].fill(0xAA);
		self.len -= count;
		Ok(count)
	}
}

/// A source that fails every read, counting attempts.
#[derive(Debug, Default)]
pub struct FailingSource {
	pub reads: usize,
}

impl Stream for FailingSource { }

impl Source for FailingSource {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
		self.reads += 1;
		// Scribble over the slice to check failed reads don't leak into the count.
		buf.fill(0xFF);
		Err(io::Error::new(io::ErrorKind::BrokenPipe, "source failed").into())
	}
}

/// A source claiming to have read more than it was given.
#[derive(Debug, Default)]
pub struct OverreportingSource;

impl Stream for OverreportingSource { }

impl Source for OverreportingSource {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
		Ok(buf.len() * 2 + 1)
	}
}

/// A source that rejects every read with a custom error.
#[derive(Debug, Default)]
pub struct RejectingSource;

impl Stream for RejectingSource { }

impl Source for RejectingSource {
	fn read(&mut self, _buf: &mut [u8]) -> Result<usize> {
		Err(Error::other(OperationKind::Other("decode frame"), "bad frame header", None))
	}
}
