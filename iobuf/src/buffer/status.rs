// SPDX-License-Identifier: Apache-2.0

use amplify_derive::Display;

/// The logical fill status of an [`IoBuffer`](super::IoBuffer).
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
pub enum Status {
	/// The buffer has no data.
	#[display("empty")]
	Empty,
	/// The buffer has data, but is not full.
	#[display("data")]
	Data,
	/// The buffer is full.
	#[display("full")]
	Full,
}

impl Status {
	/// Returns `true` if the status is [`Empty`](Self::Empty).
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Returns `true` if the status is [`Data`](Self::Data).
	pub fn has_data(&self) -> bool {
		matches!(self, Self::Data)
	}

	/// Returns `true` if the status is [`Full`](Self::Full).
	pub fn is_full(&self) -> bool {
		matches!(self, Self::Full)
	}
}
