// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io;
use std::path::Path;
use crate::Result;
use super::{ReaderSource, Source, Stream};

/// A [`Source`] reading from a [file](File). Unlike the buffer it fills, this
/// source owns the file: it's opened by [`open`](Self::open) and closed on
/// [`close`](Stream::close) or drop.
#[derive(Debug)]
pub struct FileSource {
	source: ReaderSource<File>,
	read_count: usize,
}

impl FileSource {
	pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
		File::open(path).map(Into::into)
	}

	/// Returns the total number of bytes read from the file.
	pub fn read_count(&self) -> usize { self.read_count }

	/// Unwraps the file, or returns `None` if the source was closed.
	pub fn into_inner(self) -> Option<File> {
		self.source.into_inner()
	}
}

impl From<File> for FileSource {
	fn from(value: File) -> Self {
		Self {
			source: value.into(),
			read_count: 0,
		}
	}
}

impl Stream for FileSource {
	fn is_closed(&self) -> bool {
		self.source.is_closed()
	}

	fn close(&mut self) -> Result {
		self.source.close()
	}
}

impl Source for FileSource {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
		let read_count = self.source.read(buf)?;
		self.read_count += read_count;
		Ok(read_count)
	}
}
