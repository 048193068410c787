// Copyright 2023 Strixpyrr
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! ## How it works
//!
//! An [`IoBuffer`] is a single block of memory with a fixed capacity, 8KiB by
//! default. It starts out empty and is filled from a [*source*](streams::Source),
//! anything that can make one read attempt into a slice: a [`Read`]er, a borrowed
//! file descriptor, or a file.
//!
//! Each [`fill`](IoBuffer::fill) asks for some number of bytes. The request is
//! limited to the space left in the buffer, and one read is attempted for it;
//! the source may return fewer bytes than asked for, or none at all at the end of
//! its input. The buffer does not retry. Once the buffer is full, fills return
//! zero without reading.
//!
//! ### Status
//!
//! The buffer reports a coarse [`Status`]: *empty* with no data, *full* with no
//! space left, and *data* anywhere in between.
//!
//! ### Errors
//!
//! Read errors are passed back to the caller as-is, wrapped in an [`Error`]
//! noting the failed operation. The buffer is left as it was before the fill.
//!
//! [`Read`]: std::io::Read

mod buffer;
mod error;
pub mod streams;

pub use buffer::*;
pub use error::*;

/// The default buffer capacity, in bytes. Large enough to hold a typical pipe or
/// socket read in one fill.
pub const DEFAULT_CAPACITY: usize = 8192;
