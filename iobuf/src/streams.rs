// SPDX-License-Identifier: Apache-2.0

//! Readable byte sources for [`IoBuffer::fill`](crate::IoBuffer::fill).
//!
//! A source is anything that can make one read attempt into a slice. The buffer
//! never opens or closes its sources; the caller owns their lifecycle.

mod file;
mod reader;
mod void;

cfg_if::cfg_if! {
	if #[cfg(unix)] {
		mod fd;
		pub use fd::*;
	}
}

pub use file::*;
pub use reader::*;
pub use void::*;

use crate::Result;

/// A data stream.
pub trait Stream {
	/// Returns `true` if the stream is closed.
	fn is_closed(&self) -> bool { false }

	/// Closes the stream. Closing is idempotent, [`close`](Self::close) may be
	/// called more than once with no effect.
	fn close(&mut self) -> Result { Ok(()) }
}

/// A readable byte source.
pub trait Source: Stream {
	/// Makes a single read attempt into `buf`, returning the number of bytes
	/// read. This may be less than the length of `buf`, and is `0` when the end
	/// of input is reached.
	fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

impl<S: Stream + ?Sized> Stream for &mut S {
	fn is_closed(&self) -> bool { (**self).is_closed() }

	fn close(&mut self) -> Result { (**self).close() }
}

impl<S: Source + ?Sized> Source for &mut S {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
		(**self).read(buf)
	}
}
