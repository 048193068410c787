// SPDX-License-Identifier: Apache-2.0

use std::error::Error as StdError;
use std::{io, result};
use amplify_derive::Display;
use thiserror::Error;

pub type ErrorBox = Box<dyn StdError + Send + Sync>;

pub type Result<T = ()> = result::Result<T, Error>;

/// The operation that failed.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq)]
pub enum OperationKind {
	#[default]
	#[display("unknown operation")]
	Unknown,
	#[display("fill buffer")]
	Fill,
	#[display("read from source")]
	Read,
	#[display("{0}")]
	Other(&'static str),
}

/// The kind of failure.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum ErrorKind {
	#[display("IO error")]
	Io,
	#[display("stream closed")]
	Closed,
	#[display("{0}")]
	Other(&'static str),
}

/// An error raised by a buffer or source operation.
#[derive(Debug, Error)]
#[error("{op} failed; {kind}")]
pub struct Error {
	op: OperationKind,
	kind: ErrorKind,
	#[source]
	source: Option<ErrorBox>,
}

impl Error {
	pub(crate) fn new(
		op: OperationKind,
		kind: ErrorKind,
		source: Option<ErrorBox>
	) -> Self {
		Self { op, kind, source }
	}

	/// Creates a new error with a custom message.
	pub fn other(
		op: OperationKind,
		message: &'static str,
		source: Option<ErrorBox>
	) -> Self {
		Self::new(op, ErrorKind::Other(message), source)
	}

	/// Creates a new IO error.
	pub fn io(op: OperationKind, error: io::Error) -> Self {
		Self::new(op, ErrorKind::Io, Some(error.into()))
	}

	/// Creates a new "closed" error.
	pub fn closed(op: OperationKind) -> Self {
		Self::new(op, ErrorKind::Closed, None)
	}

	/// Returns the operation kind.
	pub fn operation(&self) -> OperationKind { self.op }

	/// Sets the operation kind.
	pub fn with_operation(mut self, op: OperationKind) -> Self {
		self.op = op;
		self
	}

	/// Returns the error kind.
	pub fn kind(&self) -> ErrorKind { self.kind }

	/// Returns the source downcast into an IO Error, if possible.
	pub fn io_source(&self) -> Option<&io::Error> {
		self.source.as_ref()?.downcast_ref()
	}

	/// Returns `true` if the error was caused by a closed stream.
	pub fn is_closed(&self) -> bool {
		matches!(self.kind, ErrorKind::Closed)
	}
}

impl From<io::Error> for Error {
	fn from(value: io::Error) -> Self {
		Self::io(OperationKind::Unknown, value)
	}
}

/// Attaches an operation to the error of a result.
pub(crate) trait ResultContext<T> {
	fn context(self, op: OperationKind) -> Result<T>;
}

impl<T, E: Into<Error>> ResultContext<T> for result::Result<T, E> {
	fn context(self, op: OperationKind) -> Result<T> {
		self.map_err(|err| err.into().with_operation(op))
	}
}
