// SPDX-License-Identifier: Apache-2.0

use crate::Result;
use super::{Source, Stream};

/// Returns a [`Source`] that reads from nowhere, producing no data.
pub fn void_source() -> VoidSource { VoidSource }

/// A [`Source`] that reads from nowhere, producing no data.
#[derive(Copy, Clone, Debug, Default)]
pub struct VoidSource;

impl Stream for VoidSource { }

impl Source for VoidSource {
	/// Reads nothing, returning `0`.
	fn read(&mut self, _buf: &mut [u8]) -> Result<usize> {
		Ok(0)
	}
}
