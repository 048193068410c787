// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::Read;
use std::mem::ManuallyDrop;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, FromRawFd};
use crate::{Error, Result};
use crate::error::ResultContext;
use crate::OperationKind::Read as ReadOp;
use super::{Source, Stream};

/// A [`Source`] reading from a borrowed file descriptor, such as a pipe, socket,
/// or standard input. The descriptor is never closed by this source; opening and
/// closing it is left to its owner.
#[derive(Debug)]
pub struct FdSource<'fd> {
	fd: Option<BorrowedFd<'fd>>,
}

impl<'fd> FdSource<'fd> {
	/// Creates a source reading from `fd`.
	pub fn new(fd: BorrowedFd<'fd>) -> Self {
		Self { fd: Some(fd) }
	}

	/// Returns the borrowed descriptor, or `None` if the source was closed.
	pub fn fd(&self) -> Option<BorrowedFd<'fd>> { self.fd }
}

impl<'fd> From<BorrowedFd<'fd>> for FdSource<'fd> {
	fn from(fd: BorrowedFd<'fd>) -> Self { Self::new(fd) }
}

impl<'fd, T: AsFd> From<&'fd T> for FdSource<'fd> {
	fn from(value: &'fd T) -> Self { Self::new(value.as_fd()) }
}

impl Stream for FdSource<'_> {
	fn is_closed(&self) -> bool {
		self.fd.is_none()
	}

	/// Detaches the descriptor without closing it. Subsequent reads will fail.
	fn close(&mut self) -> Result {
		self.fd.take();
		Ok(())
	}
}

impl Source for FdSource<'_> {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
		let fd = self.fd.ok_or_else(|| Error::closed(ReadOp))?;
		// SAFETY: the descriptor is open for at least 'fd, and the file is never
		// dropped, so the descriptor is not closed here.
		let mut file = ManuallyDrop::new(unsafe { File::from_raw_fd(fd.as_raw_fd()) });
		Read::read(&mut *file, buf).context(ReadOp)
	}
}
