// SPDX-License-Identifier: Apache-2.0

use std::io::Read;
use crate::{Error, Result};
use crate::error::ResultContext;
use crate::OperationKind::Read as ReadOp;
use super::{Source, Stream};

/// A [`Source`] reading from a wrapped [`Read`]er.
#[derive(Debug)]
pub struct ReaderSource<R: Read> {
	reader: Option<R>,
}

impl<R: Read> From<R> for ReaderSource<R> {
	fn from(reader: R) -> Self {
		Self { reader: Some(reader) }
	}
}

impl<R: Read> ReaderSource<R> {
	/// Returns a reference to the reader, or `None` if the source was closed.
	pub fn get_ref(&self) -> Option<&R> { self.reader.as_ref() }

	/// Returns a mutable reference to the reader, or `None` if the source was
	/// closed.
	pub fn get_mut(&mut self) -> Option<&mut R> { self.reader.as_mut() }

	/// Unwraps the reader, or returns `None` if the source was closed.
	pub fn into_inner(self) -> Option<R> { self.reader }
}

impl<R: Read> Stream for ReaderSource<R> {
	fn is_closed(&self) -> bool {
		self.reader.is_none()
	}

	/// Closes the underlying reader by letting it fall out of scope. Subsequent
	/// reads will fail.
	fn close(&mut self) -> Result {
		self.reader.take();
		Ok(())
	}
}

impl<R: Read> Source for ReaderSource<R> {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
		let reader = self.reader
						 .as_mut()
						 .ok_or_else(|| Error::closed(ReadOp))?;
		Read::read(reader, buf).context(ReadOp)
	}
}
